use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A presentational element a node can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Break,
    ThematicBreak,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Div,
    Paragraph,
    Span,
    /// Plain link leaving the hosting application.
    Anchor,
    /// In-app navigation link.
    Link,
    Strong,
    Italic,
    Strikethrough,
    Image,
    Code,
}

impl Component {
    /// Heading component for `level`, `None` outside `1..=6`.
    pub fn heading(level: usize) -> Option<Self> {
        match level {
            1 => Some(Component::H1),
            2 => Some(Component::H2),
            3 => Some(Component::H3),
            4 => Some(Component::H4),
            5 => Some(Component::H5),
            6 => Some(Component::H6),
            _ => None,
        }
    }

    /// The HTML tag used by the default table.
    pub fn tag(self) -> &'static str {
        match self {
            Component::Break => "br",
            Component::ThematicBreak => "hr",
            Component::H1 => "h1",
            Component::H2 => "h2",
            Component::H3 => "h3",
            Component::H4 => "h4",
            Component::H5 => "h5",
            Component::H6 => "h6",
            Component::Div => "div",
            Component::Paragraph => "p",
            Component::Span => "span",
            Component::Anchor | Component::Link => "a",
            Component::Strong => "strong",
            Component::Italic => "i",
            Component::Strikethrough => "s",
            Component::Image => "img",
            Component::Code => "code",
        }
    }

    pub const ALL: [Component; 18] = [
        Component::Break,
        Component::ThematicBreak,
        Component::H1,
        Component::H2,
        Component::H3,
        Component::H4,
        Component::H5,
        Component::H6,
        Component::Div,
        Component::Paragraph,
        Component::Span,
        Component::Anchor,
        Component::Link,
        Component::Strong,
        Component::Italic,
        Component::Strikethrough,
        Component::Image,
        Component::Code,
    ];
}

/// What a component receives: attributes and already-rendered content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub attrs: Vec<(&'static str, String)>,
    pub content: String,
}

impl Element {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            attrs: vec![],
            content: content.into(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub type RenderFn = Arc<dyn Fn(&Element) -> String + Send + Sync>;
pub type EscapeFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Mapping from [`Component`] to the function that renders it.
///
/// Tables are ordinary values: build as many as needed and pass the one to
/// use into [`render`](super::render). Components without an entry render
/// as an empty string.
#[derive(Clone)]
pub struct RenderTable {
    components: HashMap<Component, RenderFn>,
    escape: EscapeFn,
}

impl RenderTable {
    /// A table with no components and no escaping.
    pub fn empty() -> Self {
        Self {
            components: HashMap::new(),
            escape: Arc::new(|s: &str| s.to_string()),
        }
    }

    /// The default HTML table. Text and attribute values are escaped.
    pub fn html() -> Self {
        let mut table = Self::empty().with_escape(|s| html_escape::encode_text(s).into_owned());
        for component in Component::ALL {
            table = match component {
                Component::Break | Component::ThematicBreak | Component::Image => {
                    table.with(component, move |el| void_tag(component.tag(), el))
                }
                Component::Code => table.with(component, |el| {
                    format!("<pre>{}</pre>", container_tag("code", el))
                }),
                _ => table.with(component, move |el| container_tag(component.tag(), el)),
            };
        }
        table
    }

    /// Sets or replaces the renderer for one component.
    #[must_use]
    pub fn with(
        mut self,
        component: Component,
        f: impl Fn(&Element) -> String + Send + Sync + 'static,
    ) -> Self {
        self.components.insert(component, Arc::new(f));
        self
    }

    /// Sets how raw node text is turned into element content.
    #[must_use]
    pub fn with_escape(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.escape = Arc::new(f);
        self
    }

    pub fn get(&self, component: Component) -> Option<&RenderFn> {
        self.components.get(&component)
    }

    pub fn escape(&self, text: &str) -> String {
        (self.escape)(text)
    }

    pub fn call(&self, component: Component, el: &Element) -> String {
        match self.get(component) {
            Some(f) => f(el),
            None => {
                log::warn!("no renderer registered for {component:?}");
                String::new()
            }
        }
    }
}

impl Default for RenderTable {
    fn default() -> Self {
        Self::html()
    }
}

impl fmt::Debug for RenderTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.components.keys().collect();
        keys.sort_by_key(|c| c.tag());
        f.debug_struct("RenderTable")
            .field("components", &keys)
            .finish_non_exhaustive()
    }
}

fn attrs_html(el: &Element) -> String {
    el.attrs
        .iter()
        .map(|(name, value)| {
            format!(
                " {name}=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            )
        })
        .collect()
}

fn void_tag(tag: &str, el: &Element) -> String {
    format!("<{tag}{} />", attrs_html(el))
}

fn container_tag(tag: &str, el: &Element) -> String {
    format!("<{tag}{}>{}</{tag}>", attrs_html(el), el.content)
}
