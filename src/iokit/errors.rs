/// Returns early with [`crate::Error::Io`] unless the kernel call succeeded.
macro_rules! kern_try {
    ($expr:expr) => {
        match $expr {
            mach2::kern_return::KERN_SUCCESS => (),
            err_code => return Err(crate::Error::Io(::std::io::Error::from_raw_os_error(err_code))),
        }
    };
}
