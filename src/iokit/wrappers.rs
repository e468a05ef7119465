use crate::error::Error;
use core_foundation::dictionary::CFMutableDictionaryRef;
use io_kit_sys::types::{io_iterator_t, io_object_t};
use io_kit_sys::{
    kIOMasterPortDefault, IOIteratorNext, IOObjectRelease, IOServiceGetMatchingServices, IOServiceMatching,
};

/// An owned IOKit object, released on drop.
#[derive(Debug)]
pub struct IoObject(io_object_t);

impl From<&IoObject> for io_object_t {
    fn from(val: &IoObject) -> io_object_t {
        val.0
    }
}

impl Drop for IoObject {
    fn drop(&mut self) {
        unsafe { IOObjectRelease(self.0) };
    }
}

/// Iterator over the registry services of one IOKit class.
#[derive(Debug)]
pub struct IoIterator(io_iterator_t);

impl IoIterator {
    pub fn for_services(name: &str) -> Option<Self> {
        let c_name = std::ffi::CString::new(name).ok()?;
        let dict = unsafe { IOServiceMatching(c_name.as_ptr()) };
        Self::matching_services(dict as _).ok()
    }

    fn matching_services(dict: CFMutableDictionaryRef) -> Result<Self, Error> {
        let mut iter: io_iterator_t = 0;
        unsafe {
            kern_try!(IOServiceGetMatchingServices(kIOMasterPortDefault, dict as _, &mut iter));
        }
        Ok(Self(iter))
    }
}

impl Iterator for IoIterator {
    type Item = IoObject;

    fn next(&mut self) -> Option<Self::Item> {
        match unsafe { IOIteratorNext(self.0) } {
            0 => None,
            io_object => Some(IoObject(io_object)),
        }
    }
}

impl Drop for IoIterator {
    fn drop(&mut self) {
        unsafe { IOObjectRelease(self.0) };
    }
}
