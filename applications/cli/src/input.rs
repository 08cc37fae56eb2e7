/// Parsing of interactive input lines
///
/// Lists are numbered from 1 on screen; everything here returns 0-based
/// indices or the selected item.

/// Split `/command argument` into the command word and the trimmed rest.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    line.split_once(' ')
        .map_or((line, ""), |(command, arg)| (command, arg.trim()))
}

/// Item at 1-based `position`.
pub fn nth<T>(items: &[T], position: usize) -> Option<&T> {
    position.checked_sub(1).and_then(|i| items.get(i))
}

/// Item whose 1-based number was typed.
pub fn pick<'a, T>(items: &'a [T], input: &str) -> Option<&'a T> {
    input.trim().parse().ok().and_then(|n| nth(items, n))
}

/// A line typed while the track list is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewCommand {
    /// Toggle the preview of the track at this index
    Toggle(usize),
    /// Open the lyrics search for the track at this index
    Lyrics(usize),
    /// Open the full track of the loaded preview
    Full,
    /// Start a preview whose autoplay was blocked
    Play,
    Quit,
    Invalid,
}

impl PreviewCommand {
    pub fn parse(line: &str, track_count: usize) -> Self {
        let (command, arg) = split_command(line);
        let index = |s: &str| {
            s.parse::<usize>()
                .ok()
                .filter(|n| (1..=track_count).contains(n))
                .map(|n| n - 1)
        };

        match command {
            "/quit" => Self::Quit,
            "/play" => Self::Play,
            "/full" => Self::Full,
            "/lyrics" => index(arg).map_or(Self::Invalid, Self::Lyrics),
            _ if arg.is_empty() => index(command).map_or(Self::Invalid, Self::Toggle),
            _ => Self::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_argument() {
        assert_eq!(split_command("  /sort   likes "), ("/sort", "likes"));
        assert_eq!(split_command("/more"), ("/more", ""));
        assert_eq!(split_command("rainy night"), ("rainy", "night"));
    }

    #[test]
    fn pick_is_one_based() {
        let items = ["a", "b", "c"];
        assert_eq!(pick(&items, "1"), Some(&"a"));
        assert_eq!(pick(&items, " 3 "), Some(&"c"));
        assert_eq!(pick(&items, "0"), None);
        assert_eq!(pick(&items, "4"), None);
        assert_eq!(pick(&items, "two"), None);
    }

    #[test]
    fn preview_commands() {
        assert_eq!(PreviewCommand::parse("2", 3), PreviewCommand::Toggle(1));
        assert_eq!(PreviewCommand::parse("/lyrics 3", 3), PreviewCommand::Lyrics(2));
        assert_eq!(PreviewCommand::parse("/full", 3), PreviewCommand::Full);
        assert_eq!(PreviewCommand::parse("/play", 3), PreviewCommand::Play);
        assert_eq!(PreviewCommand::parse("/quit", 3), PreviewCommand::Quit);
    }

    #[test]
    fn out_of_range_tracks_are_invalid() {
        assert_eq!(PreviewCommand::parse("4", 3), PreviewCommand::Invalid);
        assert_eq!(PreviewCommand::parse("/lyrics", 3), PreviewCommand::Invalid);
        assert_eq!(PreviewCommand::parse("/lyrics 0", 3), PreviewCommand::Invalid);
        assert_eq!(PreviewCommand::parse("1 2", 3), PreviewCommand::Invalid);
        assert_eq!(PreviewCommand::parse("1", 0), PreviewCommand::Invalid);
    }
}
