//! Packed color strings and their channel layouts.
//!
//! Devices store colors as hex strings whose channel order is declared by a
//! layout string in the value's `units`, e.g. `#RRGGBB` or `#WWRRGGBB`. The
//! first character of a layout is a marker (mirroring the `#` of the color
//! itself) and every following pair of characters names one channel. Channel
//! positions are character offsets, so the pair for a channel sits at the same
//! offset in the color as its tag does in the layout.
//!
//! The ImperiHome client always speaks `WWRRGGBB`, without marker.

use std::fmt;

/// Channel order used by the client.
const CLIENT_CHANNELS: [Channel; 4] = [Channel::White, Channel::Red, Channel::Green, Channel::Blue];

/// Pair written for a channel the device does not have.
const ABSENT_CHANNEL: &str = "00";

/// Errors raised while reading a layout or converting a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid channel layout {0:?}")]
    InvalidLayout(String),

    #[error("color {color:?} has no {channel} channel at offset {offset}")]
    Truncated {
        color: String,
        channel: Channel,
        offset: usize,
    },

    #[error("{0:?} is not a hex pair")]
    InvalidDigits(String),
}

/// One 2-character channel tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    White,
    Red,
    Green,
    Blue,
    /// A tag the client has no slot for.
    Other(String),
}

impl Channel {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "WW" => Self::White,
            "RR" => Self::Red,
            "GG" => Self::Green,
            "BB" => Self::Blue,
            other => Self::Other(other.to_string()),
        }
    }

    fn tag(&self) -> &str {
        match self {
            Self::White => "WW",
            Self::Red => "RR",
            Self::Green => "GG",
            Self::Blue => "BB",
            Self::Other(tag) => tag,
        }
    }

    /// Offset of this channel in a client `WWRRGGBB` string.
    fn client_offset(&self) -> Option<usize> {
        CLIENT_CHANNELS.iter().position(|c| c == self).map(|i| i * 2)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parsed channel layout of a device color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLayout {
    channels: Vec<Channel>,
}

impl ChannelLayout {
    /// Parse a layout such as `#WWRRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidLayout`] when the layout is not ASCII,
    /// has no channel after the marker, or ends with half a tag.
    pub fn parse(units: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidLayout(units.to_string());
        if !units.is_ascii() {
            return Err(invalid());
        }
        let tags = units.get(1..).ok_or_else(invalid)?;
        if tags.is_empty() || tags.len() % 2 != 0 {
            return Err(invalid());
        }
        let channels = tags
            .as_bytes()
            .chunks(2)
            .map(|pair| Channel::from_tag(&String::from_utf8_lossy(pair)))
            .collect();
        Ok(Self { channels })
    }

    /// Channels in native order.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Character offset of `channel` in a native color string.
    #[must_use]
    pub fn offset_of(&self, channel: &Channel) -> Option<usize> {
        self.channels
            .iter()
            .position(|c| c == channel)
            .map(|i| 1 + i * 2)
    }
}

/// Convert a native color into the client's `WWRRGGBB` form.
///
/// Channels missing from the layout are written as `00`, so the result is
/// always eight hex digits.
///
/// # Errors
///
/// Returns a [`ColorError`] when the layout is invalid or the color lacks a
/// valid hex pair where the layout places a channel.
pub fn encode(native: &str, units: &str) -> Result<String, ColorError> {
    let layout = ChannelLayout::parse(units)?;
    let mut out = String::with_capacity(CLIENT_CHANNELS.len() * 2);
    for channel in &CLIENT_CHANNELS {
        match layout.offset_of(channel) {
            Some(offset) => out.push_str(pair_at(native, channel, offset)?),
            None => out.push_str(ABSENT_CHANNEL),
        }
    }
    Ok(out)
}

/// Convert a client `WWRRGGBB` color into the native layout, `#`-prefixed.
///
/// Native channels the client has no slot for are dropped.
///
/// # Errors
///
/// Returns a [`ColorError`] when the layout is invalid or the client color
/// lacks a valid hex pair for one of the layout's channels.
pub fn decode(client: &str, units: &str) -> Result<String, ColorError> {
    let layout = ChannelLayout::parse(units)?;
    let mut out = String::with_capacity(units.len());
    out.push('#');
    for channel in layout.channels() {
        if let Some(offset) = channel.client_offset() {
            out.push_str(pair_at(client, channel, offset)?);
        }
    }
    Ok(out)
}

/// Whether a native color is all zeroes (`^#0+$`), i.e. the light is off.
#[must_use]
pub fn is_black(native: &str) -> bool {
    native
        .strip_prefix('#')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b == b'0'))
}

fn pair_at<'a>(color: &'a str, channel: &Channel, offset: usize) -> Result<&'a str, ColorError> {
    let pair = color
        .get(offset..offset + 2)
        .ok_or_else(|| ColorError::Truncated {
            color: color.to_string(),
            channel: channel.clone(),
            offset,
        })?;
    hex::decode(pair).map_err(|_| ColorError::InvalidDigits(pair.to_string()))?;
    Ok(pair)
}
