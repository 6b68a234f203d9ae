use crate::error::ReportError;

use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub struct Args {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl Args {
    /// Parses `argv` including the program name.
    pub fn parse(argv: &[String]) -> Result<Self, ReportError> {
        match argv {
            [_, input] => Ok(Self {
                input: PathBuf::from(input),
                output_dir: PathBuf::from("."),
            }),
            [_, input, output_dir] => Ok(Self {
                input: PathBuf::from(input),
                output_dir: PathBuf::from(output_dir),
            }),
            _ => {
                let program = argv.first().map(String::as_str).unwrap_or("busfare");
                Err(ReportError::MissingArguments {
                    usage: format!("{} <input_csv> [output_dir]", program),
                })
            }
        }
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if !self.output_dir.is_dir() {
            return Err(ReportError::OutputDirMissing(self.output_dir.clone()));
        }

        Ok(())
    }
}
