// Board alphabet classification.

/// The blank marker conventionally used in board row strings.
///
/// Any character outside the board alphabet acts as a blank, but board
/// sources normally use a space.
pub const BLANK: char = ' ';

/// Whether a character is a playable board letter.
///
/// The board alphabet is the fixed lowercase ASCII alphabet; everything
/// else (spaces, punctuation, uppercase, digits) marks an empty cell.
pub fn is_board_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Whether a token consists entirely of board letters.
///
/// Used to filter raw word-list tokens: a playable word is non-empty and
/// purely lowercase alphabetic.
pub fn is_playable_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_board_letter)
}
