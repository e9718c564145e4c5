use crate::anchors::decorate;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use std::collections::HashSet;

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Convert Markdown to HTML, assigning each heading an `id` derived from its
/// text unless the source already carries one via `{#id}` attributes.
pub fn render(markdown: &str) -> String {
    let mut events: Vec<Event> = Parser::new_ext(markdown, markdown_options()).collect();
    assign_heading_ids(&mut events);

    let mut html_out = String::new();
    html::push_html(&mut html_out, events.into_iter());
    html_out
}

/// The conversion entry point: Markdown to HTML with anchor links injected
/// into h1/h2 headings. Callers see the same interface as [`render`], plus
/// the added anchor markup.
pub fn render_decorated(markdown: &str) -> String {
    decorate(&render(markdown))
}

fn assign_heading_ids(events: &mut [Event]) {
    let mut used: HashSet<String> = HashSet::new();

    for i in 0..events.len() {
        let Event::Start(Tag::Heading { id, .. }) = &events[i] else {
            continue;
        };

        if let Some(existing) = id {
            used.insert(existing.to_string());
            continue;
        }

        let text = heading_text(&events[i + 1..]);
        let slug = unique_slug(&slugify(&text), &mut used);
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(slug));
        }
    }
}

/// Collect the plain text of a heading, up to its end tag.
fn heading_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Turn heading text into a URL-safe id: lowercase, alphanumerics and
/// underscores kept, runs of whitespace or hyphens collapsed to a single
/// hyphen, everything else dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

fn unique_slug(slug: &str, used: &mut HashSet<String>) -> String {
    if used.insert(slug.to_string()) {
        return slug.to_string();
    }
    let mut n = 1;
    loop {
        let candidate = format!("{slug}-{n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
