//! Terminal rendering of transcript messages.

use colored::Colorize;
use lagoon_core::markdown::{self, Segment};
use lagoon_core::session::ConversationMessage;
use lagoon_interaction::link::activate_link;
use lagoon_interaction::LinkOpener;

/// Prints an assistant reply, styling the markdown subset and then
/// activating any links it carried.
pub fn print_reply(message: &ConversationMessage, opener: &dyn LinkOpener) {
    if message.system_notice {
        println!("{}", message.content.yellow().italic());
        return;
    }

    let segments = markdown::parse(&message.content);
    let mut line = String::new();
    let mut urls = Vec::new();

    for segment in &segments {
        match segment {
            Segment::Plain(text) => line.push_str(text),
            Segment::Bold(text) => line.push_str(&text.bold().to_string()),
            Segment::Link { label, url } => {
                line.push_str(&label.underline().to_string());
                urls.push(url.clone());
            }
        }
    }

    println!("{line}");
    for url in urls {
        activate_link(opener, &url);
    }
}
