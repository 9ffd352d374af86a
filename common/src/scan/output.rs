use std::fmt;
use std::str::FromStr;

/// Output formats the wrapper knows how to request from nmap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Normal,
    Xml,
    Grepable,
    Json,
}

impl OutputFormat {
    pub const fn flag(self) -> &'static str {
        match self {
            OutputFormat::Normal => "-oN",
            OutputFormat::Xml => "-oX",
            OutputFormat::Grepable => "-oG",
            OutputFormat::Json => "-oJ",
        }
    }

    /// File extension for the derived output path.
    pub const fn extension(self) -> &'static str {
        match self {
            OutputFormat::Normal => "nmap",
            OutputFormat::Xml => "xml",
            OutputFormat::Grepable => "gnmap",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" | "n" => Ok(OutputFormat::Normal),
            "xml" | "x" => Ok(OutputFormat::Xml),
            "grepable" | "grep" | "g" => Ok(OutputFormat::Grepable),
            "json" | "j" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "invalid output format '{s}', expected normal, xml, grepable or json"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Normal => "normal",
            OutputFormat::Xml => "xml",
            OutputFormat::Grepable => "grepable",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}
