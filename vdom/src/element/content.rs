#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn is_none(&self) -> bool {
        matches!(self, Content::None)
    }
}
