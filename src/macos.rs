//! EDIDs from the IOKit display registry.

use crate::error::Error;
use crate::iokit::{kIODisplayOnlyPreferredName, IODisplayCreateInfoDictionary, IoIterator, IoObject};
use crate::source::DisplayEdid;
use core_foundation::base::{CFType, TCFType};
use core_foundation::data::CFData;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::CFString;
use tracing::debug;

fn display_info_dict(display: &IoObject) -> Option<CFDictionary<CFString, CFType>> {
    unsafe {
        let info = IODisplayCreateInfoDictionary(display.into(), kIODisplayOnlyPreferredName).as_ref()?;
        Some(CFDictionary::<CFString, CFType>::wrap_under_create_rule(info))
    }
}

/// EDIDs of all displays that publish one through `IODisplayConnect`.
pub fn connected_displays() -> Result<Vec<DisplayEdid>, Error> {
    let services = IoIterator::for_services("IODisplayConnect").ok_or(Error::ServiceNotFound)?;
    let edid_key = CFString::from_static_string("IODisplayEDID");

    let mut displays = Vec::new();
    for (index, service) in services.enumerate() {
        let Some(info) = display_info_dict(&service) else {
            debug!(index, "display has no info dictionary");
            continue;
        };
        match info.find(&edid_key).and_then(|value| value.downcast::<CFData>()) {
            Some(data) => displays.push(DisplayEdid {
                name: format!("display{}", index),
                edid: data.bytes().to_vec(),
            }),
            None => debug!(index, "display has no IODisplayEDID"),
        }
    }
    Ok(displays)
}
