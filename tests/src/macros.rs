#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual={e:#?}"),
        }
    };
}
