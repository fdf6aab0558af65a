use miner_core::{CorePreset, Period, ResultLimit, SortOption, Topic, ViewMode};

/// One line typed into the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Channel(String),
    Topic(Topic),
    Limit(ResultLimit),
    View(ViewMode),
    Sort(SortOption),
    Period(Period),
    Preset(CorePreset),
    /// Push a raw query string as a new history entry.
    Open(String),
    Back,
    Forward,
    Share,
    Analyze(String),
    Retry,
    Close,
    Reset,
    Keys(Vec<String>),
    AutoSearch(bool),
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <keyword>      set the keyword and search
  channel <name>        set the channel filter and search
  topic <topic>         all, shopping, clip, game, food, animal, ...
  limit <50|150|250>    result limit
  view <grid|list>      result layout
  sort <option>         relevance, views, latest, subscriberAsc, ...
  period <period>       24h, 7d, 30d, 90d, 180d, 365d, 730d, all
  preset <preset>       none, newRapidGrowth, efficiencyMonster, fastRising, krTrend, globalTrend
  open <?query>         navigate to a query string
  back | forward        history navigation
  share                 print a shareable url
  analyze <videoId>     analyze a video's comments
  retry | close         analysis panel actions
  reset                 clear search results
  keys <k1,k2,...>      set API keys (order is kept)
  auto <on|off>         re-run searches on back/forward
  status | help | quit";

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "search" | "s" => Command::Search(rest.to_string()),
        "channel" => Command::Channel(rest.to_string()),
        "topic" => Command::Topic(option(Topic::parse(rest), "topic", rest)?),
        "limit" => Command::Limit(option(ResultLimit::parse(rest), "limit", rest)?),
        "view" => Command::View(option(ViewMode::parse(rest), "view", rest)?),
        "sort" => Command::Sort(option(SortOption::parse(rest), "sort", rest)?),
        "period" => Command::Period(option(Period::parse(rest), "period", rest)?),
        "preset" => Command::Preset(option(CorePreset::parse(rest), "preset", rest)?),
        "open" => Command::Open(rest.to_string()),
        "back" => Command::Back,
        "forward" => Command::Forward,
        "share" => Command::Share,
        "analyze" if !rest.is_empty() => Command::Analyze(rest.to_string()),
        "analyze" => return Err("analyze needs a video id".to_string()),
        "retry" => Command::Retry,
        "close" => Command::Close,
        "reset" => Command::Reset,
        "keys" => Command::Keys(
            rest.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        "auto" => match rest {
            "on" => Command::AutoSearch(true),
            "off" => Command::AutoSearch(false),
            other => return Err(format!("auto expects on or off, got {other:?}")),
        },
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "" => return Err("empty command".to_string()),
        other => return Err(format!("unknown command {other:?}, try help")),
    };
    Ok(command)
}

fn option<T>(parsed: Option<T>, name: &str, raw: &str) -> Result<T, String> {
    parsed.ok_or_else(|| format!("unknown {name} {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keyword_keeps_inner_spaces() {
        assert_eq!(
            parse("search   가족 대화 "),
            Ok(Command::Search("가족 대화".to_string()))
        );
    }

    #[test]
    fn enumerated_arguments_use_wire_spellings() {
        assert_eq!(parse("topic animal"), Ok(Command::Topic(Topic::Animal)));
        assert_eq!(parse("limit 50"), Ok(Command::Limit(ResultLimit::Top50)));
        assert_eq!(parse("period 24h"), Ok(Command::Period(Period::Last24Hours)));
        assert!(parse("limit 75").is_err());
        assert!(parse("view tiles").is_err());
    }

    #[test]
    fn keys_keep_order_and_drop_blanks() {
        assert_eq!(
            parse("keys b, a,,c"),
            Ok(Command::Keys(vec!["b".into(), "a".into(), "c".into()]))
        );
    }

    #[test]
    fn analyze_requires_a_target() {
        assert!(parse("analyze").is_err());
        assert_eq!(parse("analyze abc"), Ok(Command::Analyze("abc".to_string())));
    }

    #[test]
    fn unknown_and_empty_lines_are_errors() {
        assert!(parse("   ").is_err());
        assert!(parse("dance").is_err());
    }
}
