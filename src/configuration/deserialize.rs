pub mod duration {
    use crate::time::timeunit::DurationUnit;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value
            .parse::<DurationUnit>()
            .map(Duration::from)
            .map_err(|err| D::Error::custom(err.to_string()))
    }
}

pub mod http_method {
    use http::Method;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Method, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Method::from_str(value.to_uppercase().as_str()).map_err(|err| D::Error::custom(err.to_string()))
    }

    pub fn default() -> Method {
        Method::GET
    }
}
