//! Delegated click handling for the content container.
//!
//! A click arrives as a [`ClickPath`]: the clicked element followed by its
//! ancestors up to the container. A fixed-priority table of classifiers
//! turns it into at most one [`ClickAction`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::markup::{Document, Element};

/// Id of the gallery grid whose images open the lightbox.
pub const GALLERY_GRID_ID: &str = "gallery-grid";

/// Class of copy-to-clipboard controls.
pub const COPY_CLASS: &str = "copy-btn";

/// One element on a click path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementInfo {
    pub position: usize,
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl ElementInfo {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

impl From<&Element> for ElementInfo {
    fn from(el: &Element) -> Self {
        Self {
            position: el.position,
            tag: el.tag.clone(),
            id: el.id.clone(),
            classes: el.classes.clone(),
            attrs: el.attrs.clone(),
        }
    }
}

/// The clicked element and its ancestors, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClickPath {
    elements: Vec<ElementInfo>,
}

impl ClickPath {
    pub fn new(elements: Vec<ElementInfo>) -> Self {
        Self { elements }
    }

    /// Path for a click on the element at `position` of `doc`.
    pub fn in_document(doc: &Document, position: usize) -> Self {
        Self::new(doc.lineage(position).into_iter().map(ElementInfo::from).collect())
    }

    pub fn elements(&self) -> &[ElementInfo] {
        &self.elements
    }

    /// Innermost element on the path (inclusive of the target) matching `pred`,
    /// with its index on the path.
    pub fn closest(&self, pred: impl Fn(&ElementInfo) -> bool) -> Option<(usize, &ElementInfo)> {
        self.elements.iter().enumerate().find(|(_, el)| pred(el))
    }

    /// Whether anything above path index `idx` matches `pred`.
    pub fn has_ancestor(&self, idx: usize, pred: impl Fn(&ElementInfo) -> bool) -> bool {
        self.elements.iter().skip(idx + 1).any(pred)
    }
}

/// What a click asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickAction {
    /// `nav a[href^="#"]`: scroll to the id (without `#`)
    ScrollToAnchor(String),
    /// `#gallery-grid img`: open the lightbox on the image source
    OpenLightbox(String),
    /// `.copy-btn`: copy `text`, confirm next to the control
    Copy { text: String, control: usize },
}

impl ClickAction {
    /// Whether the browser's own handling of the click must be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, ClickAction::ScrollToAnchor(_))
    }
}

type Classifier = fn(&ClickPath) -> Option<ClickAction>;

/// Classifiers in priority order; the first match wins.
const CLASSIFIERS: &[Classifier] = &[nav_anchor, gallery_image, copy_control];

/// Decide what a click does.
pub fn classify(path: &ClickPath) -> Option<ClickAction> {
    CLASSIFIERS.iter().find_map(|classify| classify(path))
}

fn nav_anchor(path: &ClickPath) -> Option<ClickAction> {
    let (idx, anchor) = path.closest(|el| {
        el.tag == "a" && el.attr("href").is_some_and(|href| href.starts_with('#'))
    })?;
    if !path.has_ancestor(idx, |el| el.tag == "nav") {
        return None;
    }
    let target = anchor.attr("href")?.trim_start_matches('#');
    Some(ClickAction::ScrollToAnchor(target.to_string()))
}

fn gallery_image(path: &ClickPath) -> Option<ClickAction> {
    let (idx, img) = path.closest(|el| el.tag == "img")?;
    if !path.has_ancestor(idx, |el| el.id.as_deref() == Some(GALLERY_GRID_ID)) {
        return None;
    }
    let src = img.attr("src")?;
    Some(ClickAction::OpenLightbox(src.to_string()))
}

fn copy_control(path: &ClickPath) -> Option<ClickAction> {
    let (_, control) = path.closest(|el| el.has_class(COPY_CLASS))?;
    let text = control.attr("data-copy")?;
    Some(ClickAction::Copy {
        text: text.to_string(),
        control: control.position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = r##"
        <nav>
            <a href="#about"><span>About</span></a>
            <a href="pages/cv.html">CV</a>
        </nav>
        <a href="#top">Back to top</a>
        <div id="gallery-grid">
            <figure><img src="img/one.jpg"></figure>
        </div>
        <img src="img/portrait.jpg">
        <button class="copy-btn" data-copy="user@example.com"><i class="icon"></i></button>
        <button class="copy-btn">Broken</button>
    "##;

    fn click(doc: &Document, pred: impl Fn(&Element) -> bool) -> Option<ClickAction> {
        let target = doc.find(pred).expect("target exists");
        classify(&ClickPath::in_document(doc, target.position))
    }

    #[test]
    fn test_nav_anchor_from_nested_target() {
        let doc = Document::parse(HOME);
        let action = click(&doc, |el| el.tag == "span");
        assert_eq!(action, Some(ClickAction::ScrollToAnchor("about".into())));
        assert!(action.unwrap().prevents_default());
    }

    #[test]
    fn test_anchor_outside_nav_is_ignored() {
        let doc = Document::parse(HOME);
        assert_eq!(click(&doc, |el| el.attr("href") == Some("#top")), None);
        assert_eq!(click(&doc, |el| el.attr("href") == Some("pages/cv.html")), None);
    }

    #[test]
    fn test_gallery_image_opens_lightbox() {
        let doc = Document::parse(HOME);
        assert_eq!(
            click(&doc, |el| el.attr("src") == Some("img/one.jpg")),
            Some(ClickAction::OpenLightbox("img/one.jpg".into()))
        );
        assert_eq!(click(&doc, |el| el.attr("src") == Some("img/portrait.jpg")), None);
    }

    #[test]
    fn test_copy_control_from_icon() {
        let doc = Document::parse(HOME);
        let button = doc.with_class(COPY_CLASS).next().unwrap().position;
        assert_eq!(
            click(&doc, |el| el.has_class("icon")),
            Some(ClickAction::Copy {
                text: "user@example.com".into(),
                control: button,
            })
        );
    }

    #[test]
    fn test_copy_control_without_value_is_ignored() {
        let doc = Document::parse(HOME);
        assert_eq!(click(&doc, |el| el.attr("class") == Some("copy-btn") && el.attr("data-copy").is_none()), None);
    }

    #[test]
    fn test_priority_first_match_wins() {
        // A copy control inside a nav anchor: the anchor takes precedence.
        let path = ClickPath::new(vec![
            ElementInfo {
                position: 2,
                tag: "button".into(),
                id: None,
                classes: vec![COPY_CLASS.into()],
                attrs: BTreeMap::from([("data-copy".to_string(), "x".to_string())]),
            },
            ElementInfo {
                position: 1,
                tag: "a".into(),
                id: None,
                classes: vec![],
                attrs: BTreeMap::from([("href".to_string(), "#contact".to_string())]),
            },
            ElementInfo {
                position: 0,
                tag: "nav".into(),
                id: None,
                classes: vec![],
                attrs: BTreeMap::new(),
            },
        ]);
        assert_eq!(classify(&path), Some(ClickAction::ScrollToAnchor("contact".into())));
    }

    #[test]
    fn test_path_deserializes_from_bridge_payload() {
        let json = r##"[
            {"position": 4, "tag": "img", "attrs": {"src": "a.jpg"}},
            {"position": 3, "tag": "div", "id": "gallery-grid"}
        ]"##;
        let path: ClickPath = serde_json::from_str(json).unwrap();
        assert_eq!(classify(&path), Some(ClickAction::OpenLightbox("a.jpg".into())));
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(classify(&ClickPath::default()), None);
    }
}
