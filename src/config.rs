use anyhow::{Result, anyhow};

pub const USAGE: &str = "\
Usage: guessing-game [OPTIONS]

Options:
  --reveal-secret   print the secret number before the first guess (demo only)
  -h, --help        print this help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub reveal_secret: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Play(GameConfig),
    Help,
}

/// Parses the arguments after the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliAction>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = GameConfig::default();
    for arg in args {
        match arg.as_ref() {
            "--reveal-secret" => config.reveal_secret = true,
            "-h" | "--help" => return Ok(CliAction::Help),
            other => return Err(anyhow!("unknown argument `{other}`")),
        }
    }
    Ok(CliAction::Play(config))
}
