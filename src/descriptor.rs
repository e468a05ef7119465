//! The four 18-byte descriptor slots of the base EDID block.

use crate::edid::EDID_BLOCK_LEN;
use nom::bytes::complete::{tag, take};
use nom::number::complete::le_u8;
use nom::sequence::tuple;
use nom::IResult;

pub(crate) const DESCRIPTOR_OFFSETS: [usize; 4] = [54, 72, 90, 108];
pub(crate) const DESCRIPTOR_LEN: usize = 18;
const PAYLOAD_LEN: usize = 13;
const DISPLAY_DESCRIPTOR_MARKER: &[u8] = &[0, 0, 0];

pub(crate) const TAG_SERIAL_NUMBER: u8 = 0xFF;
pub(crate) const TAG_ALPHANUMERIC_STRING: u8 = 0xFE;
pub(crate) const TAG_PRODUCT_NAME: u8 = 0xFC;

/// A display descriptor starts with three zero bytes (a detailed timing
/// descriptor never has a zero pixel clock), then the tag, a reserved byte
/// and the payload.
fn display_descriptor(input: &[u8]) -> IResult<&[u8], (u8, &[u8])> {
    tuple((tag(DISPLAY_DESCRIPTOR_MARKER), le_u8, le_u8, take(PAYLOAD_LEN)))(input)
        .map(|(rest, (_, kind, _, payload))| (rest, (kind, payload)))
}

/// Payloads of all display descriptors, in slot order.
pub(crate) fn display_descriptors(edid: &[u8]) -> impl Iterator<Item = (u8, &[u8])> {
    let slots: &[usize] = if edid.len() < EDID_BLOCK_LEN {
        &[]
    } else {
        &DESCRIPTOR_OFFSETS
    };
    slots
        .iter()
        .filter_map(move |&offset| edid.get(offset..offset + DESCRIPTOR_LEN))
        .filter_map(|slot| display_descriptor(slot).ok())
        .map(|(_, descriptor)| descriptor)
}

/// Text of the first descriptor carrying `wanted`.
///
/// Only the first match is considered, even when its text turns out blank.
pub(crate) fn find_text(edid: &[u8], wanted: u8) -> Option<String> {
    let (_, payload) = display_descriptors(edid).find(|&(kind, _)| kind == wanted)?;
    descriptor_text(payload)
}

/// Descriptor text ends at a line feed or NUL; anything outside printable
/// ASCII is dropped.
fn descriptor_text(payload: &[u8]) -> Option<String> {
    let text: String = payload
        .iter()
        .take_while(|&&b| b != b'\n' && b != 0)
        .filter(|b| (0x20..=0x7e).contains(*b))
        .map(|&b| char::from(b))
        .collect();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}
