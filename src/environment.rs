use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{config::EndpointConfig, error::Error};

/// The known Firefox Accounts deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Environment {
    StableDev,
    LatestDev,
    Stage,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::StableDev,
        Environment::LatestDev,
        Environment::Stage,
        Environment::Production,
    ];

    /// The label carried by this environment's [EndpointConfig].
    pub fn label(&self) -> &'static str {
        match self {
            Environment::StableDev => "StableDev",
            Environment::LatestDev => "LatestDev",
            Environment::Stage => "Stage",
            Environment::Production => "Production",
        }
    }

    pub fn config(&self) -> EndpointConfig {
        match self {
            Environment::StableDev => EndpointConfig::stable_dev(),
            Environment::LatestDev => EndpointConfig::latest_dev(),
            Environment::Stage => EndpointConfig::stage(),
            Environment::Production => EndpointConfig::production(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownEnvironment(s.to_owned()))
    }
}

impl TryFrom<String> for Environment {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Environment> for String {
    fn from(value: Environment) -> Self {
        value.label().to_owned()
    }
}

impl From<Environment> for EndpointConfig {
    fn from(value: Environment) -> Self {
        value.config()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels_match_configs() {
        for env in Environment::ALL {
            assert_eq!(env.config().label(), env.label());
        }
    }

    #[test]
    fn parse() {
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("stabledev".parse::<Environment>().unwrap(), Environment::StableDev);
        assert!(matches!(
            "nightly".parse::<Environment>(),
            Err(Error::UnknownEnvironment(name)) if name == "nightly"
        ));
    }

    #[test]
    fn display_roundtrip() {
        for env in Environment::ALL {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn serde_by_label() {
        assert_eq!(
            serde_json::to_value(Environment::LatestDev).unwrap(),
            serde_json::json!("LatestDev")
        );
        let env: Environment = serde_json::from_value(serde_json::json!("stage")).unwrap();
        assert_eq!(env, Environment::Stage);
    }
}
