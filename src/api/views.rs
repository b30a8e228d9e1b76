//! Server-rendered HTML pages.
//!
//! Every interpolated value goes through [`escape`].

use crate::domain::{Quote, RandomUser};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Random user card
pub fn user_page(user: &RandomUser) -> String {
    let location = &user.location;
    let body = format!(
        "<h1>{title}</h1>\n\
         <img src=\"{picture}\" alt=\"{name}\">\n\
         <ul>\n\
         <li>Gender: {gender}</li>\n\
         <li>Email: {email}</li>\n\
         <li>Phone: {phone}</li>\n\
         <li>Cell: {cell}</li>\n\
         <li>Address: {number} {street}, {city}, {state}, {country}</li>\n\
         </ul>",
        title = escape(&user.name.full_title()),
        picture = escape(&user.picture.large),
        name = escape(&user.name.full_name()),
        gender = escape(&user.gender),
        email = escape(&user.email),
        phone = escape(&user.phone),
        cell = escape(&user.cell),
        number = location.street.number,
        street = escape(&location.street.name),
        city = escape(&location.city),
        state = escape(&location.state),
        country = escape(&location.country),
    );
    layout("Random user", &body)
}

/// Random quote card
pub fn quote_page(quote: &Quote) -> String {
    let body = format!(
        "<img src=\"{icon}\" alt=\"icon\">\n<blockquote>{value}</blockquote>\n<a href=\"{url}\">Source</a>",
        icon = escape(&quote.icon_url),
        value = escape(&quote.value),
        url = escape(&quote.url),
    );
    layout("Random quote", &body)
}

/// Welcome heading followed by every stored message
pub fn greetings_page(welcome: &str, messages: &[String]) -> String {
    let items: String = messages
        .iter()
        .map(|m| format!("<li>Hello, {}!</li>\n", escape(m)))
        .collect();
    let body = format!("<h1>{}</h1>\n<ul>\n{}</ul>", escape(welcome), items);
    layout("Greetings", &body)
}

pub fn test_page() -> String {
    layout("Test", "<h1>Test page</h1>")
}

/// Generic failure page; deliberately carries no detail about the cause
pub fn error_page() -> String {
    layout(
        "Error",
        "<h1>Something went wrong</h1>\n<p>The page could not be loaded. Please try again later.</p>",
    )
}
