// One view function per route.
// Each returns a markup tree for the app container; nothing here touches the network.

use crate::client::markup::{Node, el, raw, text};
use crate::client::pagination::paginate;
use crate::client::router::Route;
use crate::config::{BloggyConfig, DEFAULT_CONTACT_FORM_ACTION};
use crate::domain::PostSummary;

pub const NOT_FOUND_MESSAGE: &str = "Post not found.";

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub featured_count: usize,
    pub archive_page_size: usize,
    pub contact_form_action: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            featured_count: 3,
            archive_page_size: 4,
            contact_form_action: DEFAULT_CONTACT_FORM_ACTION.to_string(),
        }
    }
}

impl From<&BloggyConfig> for ViewSettings {
    fn from(config: &BloggyConfig) -> Self {
        Self {
            featured_count: config.featured_count,
            archive_page_size: config.archive_page_size,
            contact_form_action: config.contact_form_action.clone(),
        }
    }
}

pub fn home(posts: &[PostSummary], settings: &ViewSettings) -> Node {
    let featured = posts.iter().take(settings.featured_count);

    let hero = el("section")
        .class("hero")
        .child(el("h1").text("Welcome to Bloggy"))
        .child(el("p").text("Hi there! I'm glad you're here."))
        .child(el("p").text(
            "Whether you're here to read my blog, check out my work, or just explore, \
             there's something for everyone.",
        ))
        .child(el("p").text(
            "Feel free to browse the latest posts or connect with me through my projects.",
        ));

    let featured = el("section")
        .class("featured")
        .child(el("h2").text("Featured Posts"))
        .child(
            el("div")
                .class("posts-grid")
                .children(featured.map(|post| post_link(post, "post-card"))),
        )
        .child(
            el("a")
                .class("btn")
                .attr("href", Route::Archive { page: 1 }.to_fragment())
                .text("View All Posts"),
        );

    el("div").class("home").child(hero).child(featured).into()
}

pub fn archive(posts: &[PostSummary], page: usize, settings: &ViewSettings) -> Node {
    let paginated = paginate(posts, page, settings.archive_page_size);

    let nav = el("nav")
        .class("pagination")
        .child(page_control(paginated.prev(), "prev", "← Previous"))
        .child(el("span").class("page-indicator").text(format!(
            "Page {} of {}",
            paginated.page, paginated.total_pages
        )))
        .child(page_control(paginated.next(), "next", "Next →"));

    el("section")
        .class("archive")
        .child(el("h2").text("All Posts"))
        .child(
            el("div")
                .class("posts-list")
                .children(paginated.items.iter().map(|post| post_link(post, "post-item"))),
        )
        .child(nav)
        .into()
}

/// A single post, `body_html` being the already converted markdown.
pub fn post_detail(post: &PostSummary, body_html: String) -> Node {
    el("article")
        .class("post-page")
        .child(
            el("a")
                .class("back-btn")
                .attr("href", Route::Archive { page: 1 }.to_fragment())
                .text("← Back to all posts"),
        )
        .child(el("h1").text(post.title.clone().unwrap_or_default()))
        .child(el("small").text(post_meta(post)))
        .child(el("div").class("post-content").child(raw(body_html)))
        .into()
}

pub fn contact(settings: &ViewSettings) -> Node {
    let field = |label: &str, input: Node| el("label").text(label).child(input);

    let form = el("form")
        .attr("action", settings.contact_form_action.clone())
        .attr("method", "POST")
        .class("contact-form")
        .child(field(
            "Name",
            el("input").attr("type", "text").attr("name", "name").flag("required").into(),
        ))
        .child(field(
            "Email",
            el("input").attr("type", "email").attr("name", "_replyto").flag("required").into(),
        ))
        .child(field(
            "Message",
            el("textarea").attr("name", "message").attr("rows", "5").flag("required").into(),
        ))
        .child(el("button").attr("type", "submit").class("btn").text("Send Message"));

    el("section")
        .class("contact")
        .child(el("h2").text("Contact Me"))
        .child(el("p").text(
            "Have questions, feedback, or just want to say hi? Fill out the form below!",
        ))
        .child(form)
        .into()
}

pub fn not_found() -> Node {
    el("p").child(text(NOT_FOUND_MESSAGE)).into()
}

fn post_link(post: &PostSummary, class: &'static str) -> Node {
    let route = Route::Post {
        slug: post.slug.clone(),
    };

    el("a")
        .class(class)
        .attr("href", route.to_fragment())
        .child(el("h3").text(post.title.clone().unwrap_or_default()))
        .child(el("p").text(post.excerpt.clone().unwrap_or_default()))
        .child(el("small").text(post_meta(post)))
        .into()
}

// first/last page get an inert control instead of a link
fn page_control(target: Option<usize>, rel: &'static str, label: &str) -> Node {
    match target {
        Some(page) => el("a")
            .class("btn page-link")
            .attr("rel", rel)
            .attr("href", Route::Archive { page }.to_fragment())
            .text(label)
            .into(),
        None => el("span")
            .class("btn page-link disabled")
            .attr("aria-disabled", "true")
            .text(label)
            .into(),
    }
}

fn post_meta(post: &PostSummary) -> String {
    let date = post.date.as_deref().unwrap_or_default();
    match &post.read_time {
        Some(minutes) => format!("{} · {} min read", date, minutes),
        None => date.to_string(),
    }
}
