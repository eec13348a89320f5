//! Message visibility rule
//!
//! A message is readable by a participant when it is public (`message` or
//! `status`), addressed to them, or sent by them. Public kinds bypass the
//! addressee check entirely.

use crate::entities::Message;

/// Check whether `user` may read `message`
#[inline]
pub fn is_visible_to(message: &Message, user: &str) -> bool {
    message.kind.is_public() || message.to == user || message.from == user
}

/// Messages visible to `user`, in log order
///
/// With `limit`, only the last `limit` visible entries are yielded, still in
/// log order. The iterator borrows the log and recomputes on every call; the
/// log is scanned once to size the tail and once to yield it.
pub fn visible_messages<'a>(
    messages: &'a [Message],
    user: &'a str,
    limit: Option<usize>,
) -> impl Iterator<Item = &'a Message> + Clone + 'a {
    let visible = move |m: &&Message| is_visible_to(m, user);

    let skip = match limit {
        Some(limit) => messages.iter().filter(visible).count().saturating_sub(limit),
        None => 0,
    };

    messages.iter().filter(visible).skip(skip)
}
