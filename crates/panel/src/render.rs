use crate::viewmodel::Count;
use chrono::{DateTime, Utc};
use userpanel_domain::{Contact, User};

/// Pure markup rendering for a record type: no event wiring, no state.
pub trait RenderView: Sized {
    fn render_list(visible: &[&Self], count: Count) -> String;
}

impl RenderView for User {
    fn render_list(visible: &[&Self], count: Count) -> String {
        user_table(visible, count)
    }
}

impl RenderView for Contact {
    fn render_list(visible: &[&Self], count: Count) -> String {
        contact_cards(visible, count)
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Avatar initials: first letter of the first and last words of the name.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = match words.next() {
        Some(word) => word,
        None => return "?".to_string(),
    };
    let upper = |word: &str| -> String {
        word.chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    };
    match words.last() {
        Some(last) => format!("{}{}", upper(first), upper(last)),
        None => upper(first),
    }
}

pub fn format_date(timestamp: &Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => "N/A".to_string(),
    }
}

pub fn empty_state() -> String {
    "<div class=\"empty-state\"><p>No records found.</p></div>".to_string()
}

pub fn loading_block() -> String {
    "<div class=\"loading\"><span class=\"spinner\"></span>Loading...</div>".to_string()
}

pub fn error_block(message: &str) -> String {
    format!(
        "<div class=\"error-state\"><p>{}</p></div>",
        escape_html(message)
    )
}

pub fn user_table(users: &[&User], count: Count) -> String {
    if users.is_empty() {
        return empty_state();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "<span class=\"count-badge\">{}</span>\n<table>\n<thead><tr><th>Name</th><th>Email</th><th>Role</th><th>Status</th><th>Created</th></tr></thead>\n<tbody>\n",
        count
    ));
    for user in users {
        out.push_str(&format!(
            "<tr>\
             <td><span class=\"avatar\">{initials}</span>{name}</td>\
             <td>{email}</td>\
             <td>{role}</td>\
             <td><span class=\"status-badge status-{status}\">{status}</span></td>\
             <td>{created}</td>\
             </tr>\n",
            initials = initials(&user.name),
            name = escape_html(&user.name),
            email = escape_html(&user.email),
            role = escape_html(&user.role),
            status = user.status,
            created = format_date(&user.created_at),
        ));
    }
    out.push_str("</tbody>\n</table>");
    out
}

pub fn contact_cards(contacts: &[&Contact], count: Count) -> String {
    if contacts.is_empty() {
        return empty_state();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "<span class=\"count-badge\">{}</span>\n<div class=\"cards\">\n",
        count
    ));
    for contact in contacts {
        out.push_str(&format!(
            "<div class=\"card\">\
             <h3><span class=\"avatar\">{initials}</span>{name}</h3>\
             <p>{email}</p>\
             <p>Age: {age}</p>\
             <p>{address}</p>\
             <p>{cell}</p>\
             </div>\n",
            initials = initials(&contact.name),
            name = escape_html(&contact.name),
            email = escape_html(&contact.email),
            age = escape_html(&contact.age),
            address = escape_html(&contact.address),
            cell = escape_html(&contact.cell_number),
        ));
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use userpanel_domain::UserStatus;

    #[test]
    fn it_escapes_markup() {
        assert_eq!(
            escape_html("<b>&\"'</b>"),
            "&lt;b&gt;&amp;&quot;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn it_builds_initials() {
        assert_eq!(initials("Ana Clara Souza"), "AS");
        assert_eq!(initials("ana"), "A");
        assert_eq!(initials("   "), "?");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn missing_timestamps_render_as_na() {
        assert_eq!(format_date(&None), "N/A");
    }

    #[test]
    fn the_error_block_carries_the_message() {
        let html = error_block("The api responded with status 500");
        assert!(html.contains("error-state"));
        assert!(html.contains("status 500"));
    }

    #[test]
    fn an_empty_list_renders_the_empty_state() {
        let none: Vec<&User> = Vec::new();
        let html = user_table(&none, Count { shown: 0, total: 0 });
        assert!(html.contains("empty-state"));
    }

    #[test]
    fn the_table_escapes_record_fields() {
        let user = User {
            id: "1".parse().unwrap(),
            name: "Ana <script>".into(),
            email: "a@x.com".into(),
            role: "Dev & Ops".into(),
            status: UserStatus::Active,
            created_at: None,
        };
        let html = user_table(&[&user], Count { shown: 1, total: 1 });
        assert!(html.contains("Ana &lt;script&gt;"));
        assert!(html.contains("Dev &amp; Ops"));
        assert!(html.contains("status-ativo"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn the_count_badge_shows_the_filtered_total() {
        let user = User {
            id: "1".parse().unwrap(),
            name: "Ana".into(),
            email: "a@x.com".into(),
            role: "Dev".into(),
            status: UserStatus::Active,
            created_at: None,
        };
        let html = user_table(&[&user], Count { shown: 1, total: 3 });
        assert!(html.contains("1 of 3"));
    }
}
