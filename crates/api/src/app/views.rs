//! Page layout and the HTML fragments of the starter pages.

use launchpad_ui::demo::DEPARTMENT_OPTIONS;
use launchpad_ui::html::HtmlWriter;

use crate::context::SessionContext;

const APP_NAME: &str = "Launchpad";

/// Full document: header with navigation, `body` markup, footer.
pub fn layout(title: &str, ctx: &SessionContext, sign_in_path: &str, body: &str) -> String {
    let mut w = HtmlWriter::new();
    w.raw("<!DOCTYPE html>");
    w.open("html", &[("lang", Some("en"))]);
    w.open("head", &[]);
    w.raw(r#"<meta charset="utf-8">"#);
    w.element("title", &[], &format!("{title} | {APP_NAME}"));
    w.close("head");
    w.open("body", &[]);

    w.open("header", &[("class", Some("site-header"))]);
    w.element("a", &[("href", Some("/")), ("class", Some("brand"))], APP_NAME);
    w.open("nav", &[]);
    w.element("a", &[("href", Some("/"))], "Home");
    w.element("a", &[("href", Some("/demo"))], "Demo");
    w.element("a", &[("href", Some("/dashboard"))], "Dashboard");
    match ctx.display_name() {
        Some(name) => w.element("span", &[("class", Some("signed-in"))], &format!("Signed in as {name}")),
        None => w.element("a", &[("href", Some(sign_in_path))], "Sign in"),
    }
    w.close("nav");
    w.close("header");

    w.open("main", &[("class", Some("container"))]);
    w.raw(body);
    w.close("main");

    w.open("footer", &[("class", Some("site-footer"))]);
    w.element("p", &[], &format!("{APP_NAME} starter template"));
    w.close("footer");

    w.close("body");
    w.close("html");
    w.finish()
}

pub fn home() -> String {
    let mut w = HtmlWriter::new();
    w.element("h1", &[], &format!("Welcome to {APP_NAME}"));
    w.element(
        "p",
        &[],
        "A starter with server-rendered pages, session-guarded routes, a generic data table and validated forms.",
    );
    w.open("ul", &[("class", Some("list"))]);
    for (href, label) in [
        ("/demo", "Component demo"),
        ("/dashboard", "Dashboard (requires sign-in)"),
        ("/api/auth/session", "Current session (JSON)"),
    ] {
        w.open("li", &[]);
        w.element("a", &[("href", Some(href))], label);
        w.close("li");
    }
    w.close("ul");
    w.finish()
}

pub fn sign_in(callback_url: &str, already_signed_in: bool) -> String {
    let mut w = HtmlWriter::new();
    w.element("h1", &[], "Sign in");
    if already_signed_in {
        w.element("p", &[], "You are already signed in.");
        w.element("a", &[("href", Some(callback_url))], "Continue");
        return w.finish();
    }

    w.element("p", &[], "Sign in with your identity provider to continue.");
    w.open("p", &[]);
    w.text("After signing in you will be returned to ");
    w.element("code", &[], callback_url);
    w.text(".");
    w.close("p");
    w.element("a", &[("href", Some(callback_url)), ("class", Some("button"))], "Continue");
    w.finish()
}

pub fn dashboard(greeting: &str, table_html: &str) -> String {
    let mut w = HtmlWriter::new();
    w.element("h1", &[], "Dashboard");
    w.element("p", &[], &format!("Welcome back, {greeting}."));
    w.raw(table_html);
    w.finish()
}

pub fn demo(table_html: &str) -> String {
    let mut w = HtmlWriter::new();
    w.element("h1", &[], "Demo Page");
    w.element(
        "p",
        &[],
        "This page demonstrates form elements and the data table.",
    );

    w.open("section", &[("class", Some("card"))]);
    w.element("h2", &[], "User Management");
    w.raw(table_html);
    w.close("section");

    w.open("section", &[("class", Some("card"))]);
    w.element("h2", &[], "Contact Form");
    contact_form(&mut w);
    w.close("section");

    w.open("section", &[("class", Some("card"))]);
    w.element("h2", &[], "Validated Form Example");
    example_form(&mut w);
    w.close("section");

    w.finish()
}

fn text_field(w: &mut HtmlWriter, name: &str, label: &str, kind: &str, placeholder: &str) {
    w.open("div", &[("class", Some("form-field"))]);
    w.element("label", &[("for", Some(name))], label);
    w.open(
        "input",
        &[
            ("id", Some(name)),
            ("name", Some(name)),
            ("type", Some(kind)),
            ("placeholder", Some(placeholder)),
            ("class", Some("input-default")),
        ],
    );
    w.close("div");
}

fn textarea(w: &mut HtmlWriter, name: &str, label: &str, placeholder: &str) {
    w.open("div", &[("class", Some("form-field"))]);
    w.element("label", &[("for", Some(name))], label);
    w.element(
        "textarea",
        &[("id", Some(name)), ("name", Some(name)), ("placeholder", Some(placeholder))],
        "",
    );
    w.close("div");
}

fn checkbox(w: &mut HtmlWriter, name: &str, label: &str) {
    w.open("div", &[("class", Some("checkbox"))]);
    w.open("input", &[("type", Some("checkbox")), ("id", Some(name)), ("name", Some(name))]);
    w.element("label", &[("for", Some(name))], label);
    w.close("div");
}

fn contact_form(w: &mut HtmlWriter) {
    w.open(
        "form",
        &[("data-endpoint", Some("/api/forms/contact")), ("class", Some("form"))],
    );
    text_field(w, "fullName", "Full Name *", "text", "Enter your full name");
    text_field(w, "email", "Email *", "email", "Enter your email");
    text_field(w, "phone", "Phone", "tel", "Enter your phone number");

    w.open("div", &[("class", Some("form-field"))]);
    w.element("label", &[("for", Some("department"))], "Department");
    w.open("select", &[("id", Some("department")), ("name", Some("department"))]);
    w.element("option", &[("value", Some(""))], "Select a department");
    for (value, label) in DEPARTMENT_OPTIONS {
        w.element("option", &[("value", Some(value))], label);
    }
    w.close("select");
    w.close("div");

    w.open("fieldset", &[]);
    w.element("legend", &[], "Gender");
    for (value, label) in [("male", "Male"), ("female", "Female"), ("other", "Other")] {
        let id = format!("gender-{value}");
        w.open(
            "input",
            &[("type", Some("radio")), ("id", Some(id.as_str())), ("name", Some("gender")), ("value", Some(value))],
        );
        w.element("label", &[("for", Some(id.as_str()))], label);
    }
    w.close("fieldset");

    textarea(w, "message", "Message", "Type your message here...");
    checkbox(w, "notifications", "Receive email notifications");
    checkbox(w, "terms", "I accept the terms and conditions *");

    w.element("button", &[("type", Some("submit"))], "Submit");
    w.element("button", &[("type", Some("reset"))], "Reset");
    w.close("form");
}

fn example_form(w: &mut HtmlWriter) {
    w.open(
        "form",
        &[("data-endpoint", Some("/api/forms/example")), ("class", Some("form"))],
    );
    text_field(w, "name", "Name", "text", "Enter your name");
    text_field(w, "email", "Email", "email", "Enter your email");
    text_field(w, "age", "Age", "number", "Enter your age");
    textarea(w, "message", "Message", "Enter your message (min 10 characters)");
    w.element("button", &[("type", Some("submit"))], "Submit");
    w.close("form");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_shows_sign_in_link_when_anonymous() {
        let html = layout("Home", &SessionContext::anonymous(), "/auth/signin", "<p>x</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<a href="/auth/signin">Sign in</a>"#));
        assert!(html.contains("<title>Home | Launchpad</title>"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn sign_in_escapes_the_callback() {
        let html = sign_in(r#"/x"><script>"#, false);
        assert!(html.contains(r#"href="/x&quot;&gt;&lt;script&gt;""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn demo_lists_every_department() {
        let html = demo("");
        for (value, label) in DEPARTMENT_OPTIONS {
            assert!(html.contains(&format!(r#"<option value="{value}">{label}</option>"#)));
        }
    }
}
