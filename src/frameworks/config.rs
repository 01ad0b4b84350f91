use clap::Parser;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

// Command line surface of the snake server.
#[derive(Parser, Debug)]
#[command(name = "snake_server")]
#[command(about = "Battlesnake snake server")]
#[command(version)]
pub struct Args {
    /// Host for snake server.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for snake server.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

// Listener settings resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    // Address in a form accepted by `TcpListener::bind`; hostnames are resolved.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> ServerConfig {
        Args::try_parse_from(argv)
            .expect("expected arguments to parse")
            .into()
    }

    #[test]
    fn when_no_flags_are_given_then_binds_all_interfaces_on_3001() {
        let config = parse(&["snake_server"]);

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_target(), ("0.0.0.0", 3001));
    }

    #[test]
    fn when_host_and_long_port_are_given_then_they_override_defaults() {
        let config = parse(&["snake_server", "--host", "127.0.0.1", "--port", "8080"]);

        assert_eq!(config.bind_target(), ("127.0.0.1", 8080));
    }

    #[test]
    fn when_short_port_is_given_then_it_overrides_default() {
        let config = parse(&["snake_server", "-p", "4000"]);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn when_port_is_not_a_number_then_parsing_fails() {
        let result = Args::try_parse_from(["snake_server", "--port", "abc"]);

        assert!(result.is_err());
    }

    #[test]
    fn when_unknown_flag_is_given_then_parsing_fails() {
        let result = Args::try_parse_from(["snake_server", "--verbose"]);

        assert!(result.is_err());
    }
}
