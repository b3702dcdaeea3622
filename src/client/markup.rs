// A tiny markup tree for the views.
// Text and attribute values are escaped on render; only `Node::Raw` goes out verbatim.

use htmlescape::encode_minimal;
use std::fmt;

const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Escaped on render
    Text(String),
    /// Trusted HTML, e.g. a converted post body
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

pub fn raw(html: impl Into<String>) -> Node {
    Node::Raw(html.into())
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// A boolean attribute such as `required` or `disabled`.
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Every element in this tree, depth first, including the root.
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_elements(self, &mut found);
        found
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|e| e.tag == tag)
            .collect()
    }

    /// Concatenated unescaped text, raw HTML excluded.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Raw(_) => String::new(),
            Node::Element(e) => e.children.iter().map(Node::text_content).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

fn collect_elements<'a>(node: &'a Node, found: &mut Vec<&'a Element>) {
    if let Node::Element(e) = node {
        found.push(e);
        for child in &e.children {
            collect_elements(child, found);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(t) => f.write_str(&encode_minimal(t)),
            Node::Raw(html) => f.write_str(html),
            Node::Element(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            match value {
                Some(v) => write!(f, " {}=\"{}\"", name, encode_minimal(v))?,
                None => write!(f, " {}", name)?,
            }
        }

        if VOID_TAGS.contains(&self.tag) {
            return f.write_str(" />");
        }

        f.write_str(">")?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}
