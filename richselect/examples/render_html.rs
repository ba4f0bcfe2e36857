//! Rich Select Example
//!
//! Drives a rich select through a scripted session with a tiny host:
//! - Loads options and a theme from JSON
//! - Applies intents coming back from the rendered tree
//! - Prints the HTML after every step
//!
//! Logs go to `render_html.log`.

use std::fs::File;
use std::sync::{Arc, Mutex};

use log::LevelFilter;
use richselect::{
    Intent, RichSelectConfig, SelectHandlers, SelectOption, SelectSnapshot, Theme, render,
    selectable_count,
};
use simplelog::{Config, WriteLogger};
use vdom::{Element, Event, Key, find_by_ref, to_html};

const OPTIONS: &str = r#"[
    { "text": "Fruit", "children": [
        { "value": "apple", "text": "Apple" },
        { "value": "banana", "text": "Banana" }
    ] },
    { "value": "kale", "text": "Kale" },
    { "value": 4, "text": "Four" }
]"#;

const THEME: &str = r#"{
    "TRichSelect": {
        "classes": { "wrapper": "relative", "dropdown": "absolute" },
        "variants": { "compact": { "optionContent": "px-1" } }
    }
}"#;

/// Minimal host state: what a reactive store would hold.
struct Host {
    options: Vec<SelectOption>,
    snapshot: SelectSnapshot,
}

impl Host {
    fn filtered(&self) -> Vec<SelectOption> {
        let query = self.snapshot.query.to_lowercase();
        if query.is_empty() {
            return self.options.clone();
        }
        self.options
            .iter()
            .filter_map(|option| match &option.children {
                Some(children) => {
                    let kept: Vec<_> = children
                        .iter()
                        .filter(|c| c.text.to_lowercase().contains(&query))
                        .cloned()
                        .collect();
                    (!kept.is_empty()).then(|| SelectOption::group(option.text.clone(), kept))
                }
                None => option
                    .text
                    .to_lowercase()
                    .contains(&query)
                    .then(|| option.clone()),
            })
            .collect()
    }

    fn apply(&mut self, intent: Intent) {
        log::info!("intent {:?}", intent);
        let count = selectable_count(&self.snapshot.filtered_options);
        let s = &mut self.snapshot;
        match intent {
            Intent::Toggle => s.show = !s.show,
            Intent::ArrowDown if count > 0 => {
                s.show = true;
                s.highlighted = Some(s.highlighted.map_or(0, |i| (i + 1) % count));
            }
            Intent::ArrowUp if count > 0 => {
                s.show = true;
                s.highlighted = Some(s.highlighted.map_or(count - 1, |i| (i + count - 1) % count));
            }
            Intent::Confirm => {
                let chosen = s.highlighted.and_then(|index| {
                    richselect::flatten(&s.filtered_options)
                        .into_iter()
                        .find(|entry| entry.index() == Some(index))
                        .map(|entry| entry.option().clone())
                });
                if let Some(option) = chosen {
                    s.selection = Some(option);
                    s.show = false;
                }
            }
            Intent::Choose(option) => {
                s.selection = Some(option);
                s.show = false;
            }
            Intent::Clear => s.selection = None,
            Intent::Search(text) => {
                s.query = text;
                s.highlighted = None;
            }
            Intent::Highlight(index) => s.highlighted = index,
            Intent::Blur => s.show = false,
            _ => {}
        }
        let filtered = self.filtered();
        self.snapshot.filtered_options = filtered;
    }
}

fn step(
    title: &str,
    host: &mut Host,
    config: &RichSelectConfig,
    handlers: &SelectHandlers,
    pending: &Mutex<Vec<Intent>>,
    target: &str,
    event: Event,
) {
    let tree: Element = render(config, &host.snapshot, handlers);
    if let Some(el) = find_by_ref(&tree, target) {
        el.dispatch(event);
    }

    let intents: Vec<Intent> = pending.lock().map(|mut p| p.drain(..).collect()).unwrap_or_default();
    for intent in intents {
        host.apply(intent);
    }

    let tree = render(config, &host.snapshot, handlers);
    println!("== {title}\n{}\n", to_html(&tree));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(log_file) = File::create("render_html.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let theme = Theme::default().extend(Theme::from_json_str(THEME)?);
    let config = RichSelectConfig::from_json_str(
        r#"{ "id": "food", "name": "food", "variant": "compact",
             "placeholder": "Pick a food", "clearable": true }"#,
        &theme,
    )?;

    let options: Vec<SelectOption> = serde_json::from_str(OPTIONS)?;
    let mut host = Host {
        snapshot: SelectSnapshot::new(options.clone()),
        options,
    };

    let pending = Arc::new(Mutex::new(Vec::new()));
    let sink = pending.clone();
    let handlers = SelectHandlers::from_intents(move |intent| {
        if let Ok(mut pending) = sink.lock() {
            pending.push(intent);
        }
    });

    let script = [
        ("open", "selectButton", Event::click()),
        ("down", "selectButton", Event::key(Key::Down)),
        ("down again", "searchBox", Event::key(Key::Down)),
        ("confirm", "searchBox", Event::key(Key::Enter)),
        ("search 'ka'", "searchBox", Event::input("ka")),
        ("clear", "selectButtonClearIcon", Event::click()),
    ];

    for (title, target, event) in script {
        step(title, &mut host, &config, &handlers, &pending, target, event);
    }

    Ok(())
}
