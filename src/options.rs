use clap::Parser;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
/// The one-shot CLI contract: a move decision is a pure function of these three inputs.
pub struct Cli
{
    #[arg(long, default_value = "")]
    /// the comma-separated "N. <move-notation>" history played so far, in play order
    pub moves: String,

    #[arg(long, default_value = "0,0,0")]
    /// "total_ms,white_used_ms,black_used_ms"; ignored by the fixed-depth core
    pub time: String,

    #[arg(long, default_value = "")]
    /// an uppercase subset of "LM" enabling the Ladybug and/or Mosquito
    pub expansions: String,

    #[arg(short, long, default_value_t = 2)]
    /// the fixed search horizon, in plies
    pub depth: u8,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The options applied to a game of hive.
pub struct Options
{
    /// The expansions enabled on this game.
    pub expansions: ExpansionOptions,
}

impl Options
{
    /// Returns a fully-featured set of options, including both expansion bugs.
    pub fn all() -> Self
    {
        Options {
            expansions: ExpansionOptions::all(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The expansion bugs enabled on this game.
pub struct ExpansionOptions
{
    pub ladybug:  bool,
    pub mosquito: bool,
}

impl ExpansionOptions
{
    /// Parses an uppercase subset of "LM" into the corresponding options, per the engine's CLI contract.
    pub fn parse(s: &str) -> crate::error::Result<ExpansionOptions>
    {
        let mut options = ExpansionOptions::default();
        for c in s.chars()
        {
            match c
            {
                | 'L' => options.ladybug = true,
                | 'M' => options.mosquito = true,
                | other =>
                {
                    let msg = format!("'{}' is not a recognized expansion letter (expected a subset of \"LM\").", other);
                    return Err(crate::error::Error::new(crate::error::Kind::InvalidOption, msg));
                }
            }
        }
        Ok(options)
    }

    /// Sets each expansion bug to be in-play.
    pub fn all() -> Self
    {
        ExpansionOptions {
            ladybug:  true,
            mosquito: true,
        }
    }
}
