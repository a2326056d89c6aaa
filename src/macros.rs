//! Call-site macros. Each one captures the originating file, line and
//! function so every emitted line is self-locating.

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::ENABLED {
            $crate::__log(
                $crate::Severity::Debug,
                core::file!(),
                core::line!(),
                $crate::__function!(),
                core::format_args!($($arg)*),
            );
        }
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::ENABLED {
            $crate::__log(
                $crate::Severity::Info,
                core::file!(),
                core::line!(),
                $crate::__function!(),
                core::format_args!($($arg)*),
            );
        }
    };
}

/// Logs at [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::ENABLED {
            $crate::__log(
                $crate::Severity::Warn,
                core::file!(),
                core::line!(),
                $crate::__function!(),
                core::format_args!($($arg)*),
            );
        }
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        if $crate::ENABLED {
            $crate::__log(
                $crate::Severity::Error,
                core::file!(),
                core::line!(),
                $crate::__function!(),
                core::format_args!($($arg)*),
            );
        }
    };
}

/// Logs at [`Severity::Fatal`](crate::Severity::Fatal).
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        if $crate::ENABLED {
            $crate::__log(
                $crate::Severity::Fatal,
                core::file!(),
                core::line!(),
                $crate::__function!(),
                core::format_args!($($arg)*),
            );
        }
    };
}

/// Name of the enclosing function, without its module path.
#[doc(hidden)]
#[macro_export]
macro_rules! __function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = &name[..name.len() - 3];
        match name.rfind(':') {
            Some(i) => &name[i + 1..],
            None => name,
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::severity::Severity;
    use crate::transmit::{Timeout, Transmit, TransmitError};
    use std::sync::Mutex;

    static SINK: Mutex<Vec<Vec<u8>>> = Mutex::new(Vec::new());

    struct SinkTx;

    impl Transmit for SinkTx {
        fn transmit(&mut self, bytes: &[u8], _timeout: Timeout) -> Result<(), TransmitError> {
            SINK.lock().unwrap().push(bytes.to_vec());
            Ok(())
        }
    }

    fn drain() -> Vec<Vec<u8>> {
        SINK.lock().unwrap().drain(..).collect()
    }

    // The process-wide logger and the `log` facade are both one-shot
    // installs, so everything touching them lives in this single test.
    #[test]
    #[cfg(not(feature = "off"))]
    fn global_logger_round_trip() {
        crate::init(Box::leak(Box::new(SinkTx)), Severity::Debug);

        info!("up in {}ms", 12);
        let writes = drain();
        assert_eq!(writes.len(), 3);
        assert_eq!(writes[0], b"[INFO]\t");
        let body = String::from_utf8(writes[1].clone()).unwrap();
        assert!(body.starts_with("[macros.rs:"));
        assert!(body.contains("][global_logger_round_trip]:up in 12ms"));
        assert_eq!(writes[2], b"\n");

        crate::set_threshold(Severity::Error);
        debug!("dropped");
        info!("dropped");
        warn!("dropped");
        assert!(drain().is_empty());
        error!("kept");
        fatal!("kept");
        assert_eq!(drain().len(), 6);

        crate::set_threshold(Severity::Debug);
        crate::facade::init(log::LevelFilter::Info).unwrap();
        log::warn!("via facade");
        let writes = drain();
        assert_eq!(writes.len(), 3);
        assert_eq!(writes[0], b"[WARN]\t");
        let body = String::from_utf8(writes[1].clone()).unwrap();
        assert!(body.ends_with("]:via facade"));
    }

    #[test]
    #[cfg(feature = "off")]
    fn disabled_build_transmits_nothing() {
        crate::init(Box::leak(Box::new(SinkTx)), Severity::Debug);
        for _ in 0..100 {
            debug!("quiet");
            info!("quiet");
            warn!("quiet");
            error!("quiet");
            fatal!("quiet");
        }
        crate::facade::init(log::LevelFilter::Trace).unwrap();
        log::error!("quiet");
        assert!(drain().is_empty());
    }
}
