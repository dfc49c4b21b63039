//! # Message Chunker
//!
//! Splits a long message block into chat-sized chunks without breaking lines.
//! Chunks are produced lazily and dispatched one at a time, in source order.
//!
//! Lengths are counted in `char`s. A line longer than the limit on its own is
//! cut at `char` boundaries into limit-sized pieces; the tail of such a line
//! keeps accumulating with the lines after it.

use std::future::Future;
use std::num::NonZeroUsize;

use crate::domain::traits::ChatProvider;

/// Per-message character budget used when the config does not override it.
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 1800;

/// Lazy iterator over the line-aligned chunks of a message block.
///
/// Every yielded slice borrows from the input; joining them in order gives
/// the input back unchanged.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    limit: usize,
}

impl<'a> Chunks<'a> {
    pub fn new(text: &'a str, limit: NonZeroUsize) -> Self {
        Self {
            rest: text,
            limit: limit.get(),
        }
    }
}

/// Length of the line starting at the front of `text`, terminator included.
fn next_line_len(text: &str) -> usize {
    text.find('\n').map_or(text.len(), |idx| idx + 1)
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let mut end = 0;
        let mut chars = 0;

        while end < self.rest.len() {
            let remaining = &self.rest[end..];
            let line = &remaining[..next_line_len(remaining)];
            let line_chars = line.chars().count();

            if chars + line_chars <= self.limit {
                end += line.len();
                chars += line_chars;
                continue;
            }

            if chars == 0 {
                // Oversized line with an empty accumulator: hard split.
                end = line
                    .char_indices()
                    .nth(self.limit)
                    .map_or(line.len(), |(idx, _)| idx);
            }
            break;
        }

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

/// Dispatches `text` through `send`, one chunk at a time.
///
/// Each send is awaited before the next chunk is computed. The first error
/// stops the pass and is returned as-is; chunks already sent stay sent.
/// Returns the number of chunks dispatched.
pub async fn send_chunked<F, Fut, E>(text: &str, limit: NonZeroUsize, mut send: F) -> Result<usize, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let mut sent = 0;
    for chunk in Chunks::new(text, limit) {
        tracing::debug!(index = sent, chars = chunk.chars().count(), "Dispatching chunk");
        send(chunk.to_owned()).await?;
        sent += 1;
    }
    Ok(sent)
}

/// Sends a message block to a chat room, chunked to `limit` characters.
pub async fn send_to_chat<C>(chat: &C, text: &str, limit: NonZeroUsize) -> anyhow::Result<usize>
where
    C: ChatProvider + ?Sized,
{
    let sent = send_chunked(text, limit, move |chunk| async move {
        chat.send_message(&chunk).await.map(|_| ())
    })
    .await?;

    tracing::info!("Sent {} chunk(s) to {}", sent, chat.room_id());
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    fn limit(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn chunks(text: &str, limit: NonZeroUsize) -> Chunks<'_> {
        Chunks::new(text, limit)
    }

    fn collect(text: &str, n: usize) -> Vec<&str> {
        chunks(text, limit(n)).collect()
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect("", 10).is_empty());
    }

    #[test]
    fn test_one_line_per_chunk_when_tight() {
        assert_eq!(collect("A\nB\nC\n", 3), vec!["A\n", "B\n", "C\n"]);
    }

    #[test]
    fn test_exact_limit_is_single_chunk() {
        let text = "x".repeat(DEFAULT_MAX_MESSAGE_CHARS);
        let chunks = collect(&text, DEFAULT_MAX_MESSAGE_CHARS);
        assert_eq!(chunks, vec![text.as_str()]);
    }

    #[test]
    fn test_nine_lines_fill_default_limit() {
        // 199 chars + newline = 200 per line, so nine lines land on 1800 exactly.
        let line = format!("{}\n", "a".repeat(199));
        let text = line.repeat(10);
        let chunks = collect(&text, DEFAULT_MAX_MESSAGE_CHARS);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], line.repeat(9));
        assert_eq!(chunks[1], line);
    }

    #[test]
    fn test_eight_lines_when_one_char_over() {
        // 200 chars + newline = 201 per line; a ninth line would reach 1809.
        let line = format!("{}\n", "a".repeat(200));
        let text = line.repeat(10);
        let chunks = collect(&text, DEFAULT_MAX_MESSAGE_CHARS);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], line.repeat(8));
        assert_eq!(chunks[1], line.repeat(2));
    }

    #[test]
    fn test_oversized_line_is_hard_split() {
        let chunks = collect("abcdefgh\n", 3);
        assert_eq!(chunks, vec!["abc", "def", "gh\n"]);
    }

    #[test]
    fn test_oversized_tail_joins_following_lines() {
        assert_eq!(collect("ok\nabcdefg\nhi\n", 4), vec!["ok\n", "abcd", "efg\n", "hi\n"]);
        assert_eq!(collect("abcdef\nx\n", 5), vec!["abcde", "f\nx\n"]);
    }

    #[test]
    fn test_split_respects_char_boundaries() {
        let chunks = collect("ééééé", 2);
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_last_line_without_newline() {
        assert_eq!(collect("one\ntwo", 5), vec!["one\n", "two"]);
    }

    #[tokio::test]
    async fn test_send_chunked_dispatches_in_order() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let sink = sent.clone();

        let count = send_chunked("A\nB\nC\n", limit(3), move |chunk| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(chunk);
                Ok::<(), ()>(())
            }
        })
        .await
        .unwrap();

        assert_eq!(count, 3);
        assert_eq!(*sent.lock().unwrap(), vec!["A\n", "B\n", "C\n"]);
    }

    #[tokio::test]
    async fn test_send_chunked_empty_input_never_sends() {
        let count = send_chunked("", limit(5), |_chunk| async {
            Err::<(), &str>("should not be called")
        })
        .await
        .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_send_failure_aborts_pass() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let sink = sent.clone();

        let result = send_chunked("A\nB\nC\n", limit(3), move |chunk| {
            let sink = sink.clone();
            async move {
                let mut guard = sink.lock().unwrap();
                if guard.len() == 1 {
                    return Err(format!("rejected {chunk:?}"));
                }
                guard.push(chunk);
                Ok(())
            }
        })
        .await;

        assert_eq!(result, Err("rejected \"B\\n\"".to_string()));
        assert_eq!(*sent.lock().unwrap(), vec!["A\n"]);
    }

    #[tokio::test]
    async fn test_send_to_chat_stops_at_failed_chunk() {
        let chat = crate::application::testing::FakeChat {
            fail_after: Some(2),
            ..Default::default()
        };

        let result = send_to_chat(&chat, "A\nB\nC\nD\n", limit(2)).await;

        assert!(result.is_err());
        assert_eq!(chat.messages(), vec!["A\n", "B\n"]);
    }

    proptest! {
        #[test]
        fn prop_chunks_rejoin_to_input(text in "(?s).{0,400}", n in 1usize..64) {
            let joined: String = chunks(&text, limit(n)).collect();
            prop_assert_eq!(joined, text);
        }

        #[test]
        fn prop_chunks_within_limit(text in "(?s).{0,400}", n in 1usize..64) {
            for chunk in chunks(&text, limit(n)) {
                prop_assert!(!chunk.is_empty());
                prop_assert!(chunk.chars().count() <= n);
            }
        }

        #[test]
        fn prop_fitting_lines_never_split(
            lines in prop::collection::vec("[a-z ]{0,20}\n", 0..40),
            n in 21usize..200,
        ) {
            let text = lines.concat();
            for chunk in chunks(&text, limit(n)) {
                prop_assert!(chunk.ends_with('\n'));
            }
        }

        #[test]
        fn prop_rechunking_is_stable(text in "(?s).{0,400}", n in 1usize..64) {
            let first: Vec<&str> = chunks(&text, limit(n)).collect();
            let rejoined = first.concat();
            let second: Vec<&str> = chunks(&rejoined, limit(n)).collect();
            prop_assert_eq!(first, second);
        }
    }
}
