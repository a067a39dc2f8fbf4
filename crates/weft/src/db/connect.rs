use weft_core::{bail, Connection, Error, Result};

use url::Url;

/// Opens a connection for `url`, choosing the driver by URL scheme.
///
/// Drivers are enabled through cargo features, e.g. `sqlite`.
pub fn connect(url: &str) -> Result<Box<dyn Connection>> {
    let parsed = Url::parse(url).map_err(|err| {
        Error::from(anyhow::Error::from(err))
            .context(weft_core::err!("invalid database url `{url}`"))
    })?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(&parsed),
        scheme => bail!("unsupported database; scheme={scheme}; url={url}"),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    let connection = weft_driver_sqlite::Sqlite::new(url.as_str())?.connect()?;
    Ok(Box::new(connection))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &Url) -> Result<Box<dyn Connection>> {
    bail!("`sqlite` feature not enabled")
}
