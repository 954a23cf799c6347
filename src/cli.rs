//! Command-line surface: argument parsing and the local/remote query source.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::client::DoctorClient;
use crate::config::Config;
use crate::kb::KnowledgeBase;
use crate::render;

#[derive(Debug, Parser)]
#[command(name = "dr-macadamia")]
#[command(about = "Symptom checker and disease lookup for macadamia crops")]
pub struct Cli {
    /// Knowledge base CSV (overrides DR_MACADAMIA_DATA)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Query a running server instead of loading the table locally
    #[arg(short, long, global = true)]
    pub remote: bool,

    /// API base URL for remote mode (implies --remote; default DR_MACADAMIA_URL)
    #[arg(short, long, global = true, value_name = "URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        /// Port for HTTP API (overrides DR_MACADAMIA_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Diagnose by symptom: possible causes and recommended treatments
    Diagnose { symptom: String },
    /// Look up the symptoms and treatments of a disease or pest
    Lookup { disease: String },
    /// List every known symptom
    Symptoms,
    /// List every known disease or pest
    Diseases,
}

impl Cli {
    pub fn is_remote(&self) -> bool {
        self.remote || self.server.is_some()
    }

    /// The subcommand to run. No subcommand starts the server.
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Serve { port: None })
    }

    pub fn config(&self) -> Config {
        let port = match self.command {
            Some(Commands::Serve { port }) => port,
            _ => None,
        };
        Config::from_env().with_overrides(self.data.clone(), port)
    }
}

/// Where queries are answered: the local table or a remote server.
pub enum Source {
    Local(KnowledgeBase),
    Remote(DoctorClient),
}

impl Source {
    pub fn open(cli: &Cli, config: &Config) -> anyhow::Result<Self> {
        if cli.is_remote() {
            Ok(Self::Remote(DoctorClient::from_env(cli.server.clone())))
        } else {
            Ok(Self::Local(KnowledgeBase::load(&config.data_path)?))
        }
    }

    /// Run a query command and return its rendered view.
    pub async fn run(&self, command: &Commands) -> anyhow::Result<String> {
        let output = match (self, command) {
            (Self::Local(kb), Commands::Diagnose { symptom }) => {
                render::render_diagnosis(&kb.diagnose(symptom))
            }
            (Self::Local(kb), Commands::Lookup { disease }) => {
                render::render_profile(&kb.profile(disease))
            }
            (Self::Local(kb), Commands::Symptoms) => render::render_list(kb.symptoms()),
            (Self::Local(kb), Commands::Diseases) => render::render_list(kb.diseases()),
            (Self::Remote(client), Commands::Diagnose { symptom }) => {
                render::render_diagnosis(&client.diagnose(symptom).await?)
            }
            (Self::Remote(client), Commands::Lookup { disease }) => {
                render::render_profile(&client.profile(disease).await?)
            }
            (Self::Remote(client), Commands::Symptoms) => {
                render::render_list(&client.symptoms().await?)
            }
            (Self::Remote(client), Commands::Diseases) => {
                render::render_list(&client.diseases().await?)
            }
            (_, Commands::Serve { .. }) => {
                anyhow::bail!("serve always loads the table locally; drop --remote/--server")
            }
        };
        Ok(output)
    }
}
