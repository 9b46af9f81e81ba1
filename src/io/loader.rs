//! Location file loading.
//!
//! Two formats are accepted:
//!
//! - **Text**: repeating four-line records of name, address, latitude and
//!   longitude. `\n` and `\r\n` line endings both work. Blank lines
//!   between records are skipped; inside a record a blank line is an empty
//!   field, so an address may be left empty.
//! - **JSON**: an array of `{"name", "address", "latitude", "longitude"}`
//!   objects.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Location;

/// Parses the four-line text format.
///
/// # Examples
///
/// ```
/// use u_tworoute::io::parse_locations;
///
/// let text = "Kiosk A\r\n100 W Lake St\r\n41.8857\r\n-87.6309\r\n\
///             Kiosk B\r\n1 N State St\r\n41.8820\r\n-87.6278\r\n";
/// let locations = parse_locations(text).unwrap();
/// assert_eq!(locations.len(), 2);
/// assert_eq!(locations[1].address(), "1 N State St");
///
/// assert!(parse_locations("Kiosk A\n100 W Lake St\nnorth\n-87.6\n").is_err());
/// ```
pub fn parse_locations(text: &str) -> Result<Vec<Location>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .peekable();
    let mut locations = Vec::new();

    loop {
        while lines.next_if(|(_, line)| line.is_empty()).is_some() {}
        let Some((first_line, name)) = lines.next() else {
            break;
        };
        let mut field = |expected: &str| {
            lines.next().ok_or_else(|| Error::Parse {
                line: first_line,
                reason: format!("incomplete record for '{name}': missing {expected}"),
            })
        };
        let (_, address) = field("address")?;
        let latitude = parse_coordinate(field("latitude")?)?;
        let longitude = parse_coordinate(field("longitude")?)?;
        locations.push(Location::new(name, address, latitude, longitude));
    }
    Ok(locations)
}

/// Parses the JSON array format.
pub fn parse_locations_json(text: &str) -> Result<Vec<Location>> {
    Ok(serde_json::from_str(text)?)
}

/// Reads a location file, choosing the format by extension (`.json` is
/// JSON, anything else is the text format).
pub fn load_locations(path: impl AsRef<Path>) -> Result<Vec<Location>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let locations = if is_json {
        parse_locations_json(&text)?
    } else {
        parse_locations(&text)?
    };
    tracing::debug!(path = %path.display(), count = locations.len(), "loaded locations");
    Ok(locations)
}

fn parse_coordinate((line, value): (usize, &str)) -> Result<f64> {
    value.parse::<f64>().map_err(|e| Error::Parse {
        line,
        reason: format!("invalid coordinate '{value}': {e}"),
    })
}
