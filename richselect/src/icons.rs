//! SVG icons drawn inside the select.

use vdom::{ClassList, Element};

const CHEVRON_PATH: &str = "M10 3a1 1 0 01.707.293l3 3a1 1 0 01-1.414 1.414L10 5.414 7.707 \
    7.707a1 1 0 01-1.414-1.414l3-3A1 1 0 0110 3zm-3.707 9.293a1 1 0 011.414 0L10 14.586l2.293-2.293a1 \
    1 0 011.414 1.414l-3 3a1 1 0 01-1.414 0l-3-3a1 1 0 010-1.414z";

const CROSS_POINTS: &str = "10 8.58578644 2.92893219 1.51471863 1.51471863 2.92893219 8.58578644 10 \
    1.51471863 17.0710678 2.92893219 18.4852814 10 11.4142136 17.0710678 18.4852814 18.4852814 \
    17.0710678 11.4142136 10 18.4852814 2.92893219 17.0710678 1.51471863 10 8.58578644";

const CHECK_POINTS: &str = "0 11 2 9 7 14 18 3 20 5 7 18";

fn icon(classes: ClassList) -> Element {
    Element::svg()
        .attr("fill", "currentColor")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", "0 0 20 20")
        .classes(classes)
}

/// Up/down chevron shown when the select cannot be cleared.
pub fn chevron(classes: ClassList) -> Element {
    icon(classes).child(
        Element::path()
            .attr("clip-rule", "evenodd")
            .attr("fill-rule", "evenodd")
            .attr("d", CHEVRON_PATH),
    )
}

/// Cross used by the clear button.
pub fn cross(classes: ClassList) -> Element {
    icon(classes).child(Element::polygon().attr("points", CROSS_POINTS))
}

/// Checkmark next to the selected option.
pub fn checkmark(classes: ClassList) -> Element {
    icon(classes).child(Element::polygon().attr("points", CHECK_POINTS))
}
