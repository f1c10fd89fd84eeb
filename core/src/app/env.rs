use std::path::PathBuf;

/// Loads variables from a `.env` file in the current directory (or its parents) into the process environment.
/// Variables already set in the environment are not overridden.
///
/// Returns the path of the loaded file, or `None` if there is no `.env` file.
///
/// # Errors
///
/// Returns an error if a `.env` file exists but could not be read or parsed.
pub fn load_dotenv_into_env() -> Result<Option<PathBuf>, dotenvy::Error> {
  found_or_missing(dotenvy::dotenv())
}

fn found_or_missing(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, dotenvy::Error> {
  match result {
    Ok(path) => Ok(Some(path)),
    Err(e) if e.not_found() => Ok(None),
    Err(e) => Err(e),
  }
}
