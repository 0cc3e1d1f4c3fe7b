use crate::text;

use std::fmt;

/// How many moves are listed before collapsing the rest.
pub const PREVIEW: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge<'a> {
    Move(&'a str),
    Overflow(usize),
}

pub fn badges(moves: &[String]) -> Vec<Badge<'_>> {
    let mut badges: Vec<_> = moves
        .iter()
        .take(PREVIEW)
        .map(|name| Badge::Move(name))
        .collect();

    if moves.len() > PREVIEW {
        badges.push(Badge::Overflow(moves.len() - PREVIEW));
    }

    badges
}

impl fmt::Display for Badge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Move(name) => f.write_str(&text::humanize(name)),
            Badge::Overflow(remaining) => write!(f, "+{remaining} more"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(amount: usize) -> Vec<String> {
        (0..amount).map(|i| format!("move-{i}")).collect()
    }

    #[test]
    fn long_lists_are_truncated_with_an_overflow_badge() {
        let moves = moves(15);
        let badges = badges(&moves);

        assert_eq!(badges.len(), PREVIEW + 1);
        assert_eq!(
            badges
                .iter()
                .filter(|badge| matches!(badge, Badge::Move(_)))
                .count(),
            12
        );
        assert_eq!(badges.last(), Some(&Badge::Overflow(3)));
        assert_eq!(badges[PREVIEW].to_string(), "+3 more");
    }

    #[test]
    fn short_lists_have_no_overflow() {
        let moves = moves(PREVIEW);

        assert!(
            badges(&moves)
                .iter()
                .all(|badge| matches!(badge, Badge::Move(_)))
        );
        assert!(badges(&[]).is_empty());
    }

    #[test]
    fn move_names_are_humanized() {
        let moves = vec!["thunder-punch".to_owned()];

        assert_eq!(badges(&moves)[0].to_string(), "Thunder Punch");
    }
}
