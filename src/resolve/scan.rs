// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::{memchr, memchr_iter};

use crate::model::ids::is_id_char;
use crate::model::{ParseRefTokenError, RefToken};

/// One canonical token found in prompt text. `start..end` is the byte span
/// of the token, `@` included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedRef {
    pub start: usize,
    pub end: usize,
    pub token: RefToken,
}

/// Finds every well-formed canonical token in `text`, left to right.
///
/// A token opens only at an `@` preceded by start-of-text or whitespace, the
/// same boundary rule the live tokenizer applies, so `user@example.com`
/// never scans as a reference. Structural ids end at the first character
/// outside the id charset; sentence punctuation after a token stays out of
/// the id. Text between tokens is ignored, malformed near-tokens included.
pub fn scan_prompt(text: &str) -> Vec<ScannedRef> {
    let mut out = Vec::new();
    let mut resume = 0usize;

    for at in memchr_iter(b'@', text.as_bytes()) {
        if at < resume || !starts_token(text, at) {
            continue;
        }
        let Some(scanned) = token_at(text, at) else {
            continue;
        };
        resume = scanned.end;
        out.push(scanned);
    }

    out
}

fn starts_token(text: &str, at: usize) -> bool {
    text[..at].chars().next_back().map_or(true, char::is_whitespace)
}

fn token_at(text: &str, at: usize) -> Option<ScannedRef> {
    let body = &text[at + 1..];
    let id_run = body
        .char_indices()
        .find(|&(_, ch)| !is_id_char(ch))
        .map_or(body.len(), |(idx, _)| idx);

    if id_run > 0 {
        let end = at + 1 + id_run;
        match RefToken::parse(&text[at..end]) {
            Ok(token) => {
                return Some(ScannedRef {
                    start: at,
                    end,
                    token,
                });
            }
            // A category prefix commits the token to the structural form;
            // with no id behind it there is nothing to scan.
            Err(ParseRefTokenError::InvalidTargetId(_)) => return None,
            Err(_) => {}
        }
    }

    mention_at(text, at)
}

/// Tries the `@<DisplayName> (<email>)` form. Mentions never span lines, and
/// a display name never contains another `@`, which keeps one mention from
/// swallowing the next token on the line.
fn mention_at(text: &str, at: usize) -> Option<ScannedRef> {
    let body = &text[at + 1..];
    let line_end = memchr(b'\n', body.as_bytes()).unwrap_or(body.len());
    let line = &body[..line_end];

    for close in memchr_iter(b')', line.as_bytes()) {
        let end = at + 1 + close + 1;
        let Ok(token) = RefToken::parse(&text[at..end]) else {
            continue;
        };
        let RefToken::Mention { name, .. } = &token else {
            continue;
        };
        if name.contains('@') {
            return None;
        }
        return Some(ScannedRef {
            start: at,
            end,
            token,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{scan_prompt, ScannedRef};
    use crate::model::{RefCategory, RefToken};

    fn structural(category: RefCategory, target_id: &str) -> RefToken {
        RefToken::Structural {
            category,
            target_id: target_id.parse().expect("target id"),
        }
    }

    #[test]
    fn finds_structural_tokens_with_byte_spans() {
        let text = "See @referenced-field:f1 and @referenced-collection:c:items.";
        assert_eq!(
            scan_prompt(text),
            vec![
                ScannedRef {
                    start: 4,
                    end: 24,
                    token: structural(RefCategory::ReferencedField, "f1"),
                },
                ScannedRef {
                    start: 29,
                    end: 59,
                    token: structural(RefCategory::ReferencedCollection, "c:items"),
                },
            ]
        );
    }

    #[test]
    fn sentence_punctuation_stays_out_of_ids() {
        let scanned = scan_prompt("Use @referenced-field:f1, then stop.");
        assert_eq!(scanned.len(), 1);
        assert_eq!(&scanned[0].token, &structural(RefCategory::ReferencedField, "f1"));
        assert_eq!(scanned[0].end, 24);
    }

    #[test]
    fn finds_mentions_and_skips_the_email_at() {
        let scanned = scan_prompt("Ping @Rivka Stein (rivka@example.com) today");
        assert_eq!(
            scanned,
            vec![ScannedRef {
                start: 5,
                end: 37,
                token: RefToken::Mention {
                    name: "Rivka Stein".to_owned(),
                    email: "rivka@example.com".to_owned(),
                },
            }]
        );
    }

    #[test]
    fn infix_at_is_not_a_trigger() {
        assert!(scan_prompt("mail a@b.com please").is_empty());
        assert!(scan_prompt("user@referenced-field:f1").is_empty());
    }

    #[test]
    fn category_prefix_without_an_id_scans_as_nothing() {
        assert!(scan_prompt("@referenced-field: nothing here").is_empty());
    }

    #[test]
    fn bare_names_and_implausible_mentions_scan_as_nothing() {
        assert!(scan_prompt("Ask @Rivka Stein about it").is_empty());
        assert!(scan_prompt("Ask @Rivka (legal) about it").is_empty());
        assert!(scan_prompt("@ (rivka@example.com)").is_empty());
    }

    #[test]
    fn mention_never_swallows_a_later_token() {
        let scanned = scan_prompt("Hi @Rivka (x) and @Bob Lee (bob@example.com)");
        assert_eq!(
            scanned,
            vec![ScannedRef {
                start: 18,
                end: 44,
                token: RefToken::Mention {
                    name: "Bob Lee".to_owned(),
                    email: "bob@example.com".to_owned(),
                },
            }]
        );
    }

    #[test]
    fn mentions_stay_on_one_line() {
        assert!(scan_prompt("Hey @Rivka\nStein (rivka@example.com)").is_empty());
    }

    #[test]
    fn participant_fallback_form_scans_as_structural() {
        let scanned = scan_prompt("cc @participant:p:reviewer");
        assert_eq!(
            scanned,
            vec![ScannedRef {
                start: 3,
                end: 26,
                token: structural(RefCategory::Participant, "p:reviewer"),
            }]
        );
    }

    #[test]
    fn parenthesized_name_keeps_the_outer_mention() {
        let scanned = scan_prompt("Ask @Jo Anne (legal) (jo@example.com) first");
        assert_eq!(
            scanned,
            vec![ScannedRef {
                start: 4,
                end: 37,
                token: RefToken::Mention {
                    name: "Jo Anne (legal)".to_owned(),
                    email: "jo@example.com".to_owned(),
                },
            }]
        );
    }

    #[test]
    fn adjacent_tokens_all_scan() {
        let text = "@referenced-field:f1 @knowledge-document:k1\n@extraction-rule:x1";
        let scanned = scan_prompt(text);
        assert_eq!(
            scanned
                .iter()
                .map(|s| s.token.to_string())
                .collect::<Vec<_>>(),
            vec![
                "@referenced-field:f1",
                "@knowledge-document:k1",
                "@extraction-rule:x1",
            ]
        );
    }
}
