use {super::*, clap::Parser};

#[derive(Debug, Parser)]
#[command(
  name = "reddit",
  about = "Print a ranked summary of a reddit listing",
  override_usage = "reddit [options] URL_OR_COMMUNITY_NAME"
)]
pub(crate) struct Arguments {
  /// Number of articles to display
  #[arg(
    short = 'n',
    value_name = "LIMIT",
    default_value_t = Config::DEFAULT_LIMIT,
    allow_negative_numbers = true
  )]
  limit: i64,
  /// Field to sort articles by
  #[arg(
    short = 'o',
    value_name = "ORDERBY",
    default_value = Config::DEFAULT_ORDER_BY,
    allow_hyphen_values = true
  )]
  order_by: String,
  /// Everything after the target, left unread
  #[allow(dead_code)]
  #[arg(
    index = 2,
    hide = true,
    trailing_var_arg = true,
    allow_hyphen_values = true,
    num_args = 0..
  )]
  rest: Vec<String>,
  /// Shorten URLs using the shortening service
  #[arg(short = 's')]
  shorten: bool,
  /// Feed URL, or the name of a community to list
  #[arg(value_name = "URL_OR_COMMUNITY_NAME", index = 1)]
  target: Target,
  /// Truncate titles to this many characters
  #[arg(
    short = 't',
    value_name = "TITLELEN",
    default_value_t = Config::DEFAULT_TITLE_LENGTH,
    allow_negative_numbers = true
  )]
  title_length: usize,
}

impl Arguments {
  /// Usage errors exit with 1 and explicit help with 0.
  pub(crate) fn exit_code(error: &clap::Error) -> i32 {
    i32::from(error.use_stderr())
  }

  pub(crate) fn into_config(self) -> Config {
    Config {
      limit: self.limit,
      order_by: self.order_by,
      shorten: self.shorten,
      target: self.target,
      title_length: self.title_length,
    }
  }

  pub(crate) fn parse_or_exit() -> Config {
    match Self::try_parse() {
      Ok(arguments) => arguments.into_config(),
      Err(error) => {
        let _ = error.print();
        process::exit(Self::exit_code(&error));
      }
    }
  }
}
