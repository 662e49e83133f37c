//! KML placemark rendering for station markers.

use std::borrow::Cow;

use crate::domain::{CountryCode, format_coordinate};

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Description attached to every station marker.
pub const MARKER_DESCRIPTION: &str = "Ground Station Marker";

/// Render the placemark for one station.
///
/// The placemark is named after the country code, styled with the flag icon
/// and positioned at `lng,lat,0`.
pub fn station_placemark(code: &CountryCode, icon_href: &str, latitude: f64, longitude: f64) -> String {
    format!(
        concat!(
            "<Placemark xmlns=\"{ns}\">",
            "<name>{name}</name>",
            "<description>{description}</description>",
            "<Style><IconStyle><Icon><href>{href}</href></Icon></IconStyle></Style>",
            "<Point><coordinates>{lng},{lat},0</coordinates></Point>",
            "</Placemark>"
        ),
        ns = KML_NAMESPACE,
        name = code.as_str(),
        description = MARKER_DESCRIPTION,
        href = escape_xml(icon_href),
        lng = format_coordinate(longitude),
        lat = format_coordinate(latitude),
    )
}

/// Escape text for use inside an XML element.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
