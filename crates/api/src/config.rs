use std::path::PathBuf;

use clap::Parser;

/// Server configuration from command-line flags, falling back to
/// environment variables (a `.env` file is loaded first).
///
/// | Flag                      | Env Var                | Default                          |
/// |---------------------------|------------------------|----------------------------------|
/// | `--frames`, `-f`          | `FRAMES_DIR`           | `outdoor_frames`                 |
/// | `--annotations`, `-a`     | `ANNOTATIONS_DIR`      | `<parent of frames>/annotations` |
/// | `--host`                  | `HOST`                 | `0.0.0.0`                        |
/// | `--port`, `-p`            | `PORT`                 | `5000`                           |
/// | `--static-dir`            | `STATIC_DIR`           | unset                            |
/// | `--cors-origins`          | `CORS_ORIGINS`         | `http://localhost:5173`          |
/// | `--request-timeout-secs`  | `REQUEST_TIMEOUT_SECS` | `30`                             |
#[derive(Debug, Clone, Parser)]
#[command(name = "framelabel-api", version, about = "Video frame annotation server")]
pub struct ServerConfig {
    /// Directory with one sub-folder of JPEG frames per video.
    #[arg(short = 'f', long = "frames", env = "FRAMES_DIR", default_value = "outdoor_frames")]
    pub frames_dir: PathBuf,
    /// Where annotation JSON files are stored.
    #[arg(short = 'a', long = "annotations", env = "ANNOTATIONS_DIR")]
    pub annotations_dir: Option<PathBuf>,
    /// Bind address.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    /// Bind port.
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
    /// Optional directory of UI assets served for unmatched routes.
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
    /// Allowed CORS origins, comma-separated.
    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Address to listen on. `host` may be an IP literal or a hostname.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let config = ServerConfig::try_parse_from(["framelabel-api"]).unwrap();
        if std::env::var_os("PORT").is_none() {
            assert_eq!(config.port, 5000);
        }
        if std::env::var_os("FRAMES_DIR").is_none() {
            assert_eq!(config.frames_dir, PathBuf::from("outdoor_frames"));
        }
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "framelabel-api",
            "-f",
            "/data/frames",
            "--annotations",
            "/data/labels",
            "-p",
            "8080",
            "--cors-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(config.frames_dir, PathBuf::from("/data/frames"));
        assert_eq!(config.annotations_dir, Some(PathBuf::from("/data/labels")));
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(ServerConfig::try_parse_from(["framelabel-api", "--port", "99999"]).is_err());
    }

    #[tokio::test]
    async fn hostname_host_binds() {
        let config =
            ServerConfig::try_parse_from(["framelabel-api", "--host", "localhost", "-p", "0"])
                .unwrap();

        let listener = tokio::net::TcpListener::bind(config.bind_target())
            .await
            .unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
