use extcmd::encode::encode;
use extcmd::{Arg, EncodeError};

fn parse(line: &str) -> (u64, String, Vec<String>) {
    let line = line.strip_suffix('\n').expect("newline terminated");
    let (stamp, body) = line.split_once(' ').expect("space after timestamp");
    let epoch: u64 = stamp
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .expect("bracketed timestamp")
        .parse()
        .expect("numeric timestamp");
    let mut fields = body.split(';');
    let name = fields.next().expect("command token").to_string();
    (epoch, name, fields.map(str::to_string).collect())
}

#[test]
fn round_trip_recovers_timestamp_name_and_args() {
    let cases: Vec<(&str, Vec<Arg>)> = vec![
        ("SHUTDOWN_PROGRAM", vec![]),
        ("ENABLE_HOST_CHECK", vec![Arg::Text("web01".into())]),
        (
            "ACKNOWLEDGE_SVC_PROBLEM",
            vec![
                Arg::Text("web01".into()),
                Arg::Text("http proxy".into()),
                Arg::Integer(2),
                Arg::Flag(true),
                Arg::Flag(false),
                Arg::Text("alice".into()),
                Arg::Text("looking into it".into()),
            ],
        ),
        (
            "CHANGE_HOST_MODATTR",
            vec![Arg::Text("db01".into()), Arg::Integer(-1)],
        ),
    ];

    for (name, args) in cases {
        let line = encode(name, 1700000000, &args).expect("encode");
        let (epoch, token, fields) = parse(&line);
        assert_eq!(epoch, 1700000000);
        assert_eq!(token, name);
        let rendered: Vec<String> = args.iter().map(Arg::render).collect();
        assert_eq!(fields, rendered, "{name} fields");
    }
}

#[test]
fn field_count_always_equals_argument_count() {
    for n in 0..8usize {
        let args: Vec<Arg> = (0..n).map(|i| Arg::Integer(i as i64)).collect();
        let line = encode("SCHEDULE_HOST_CHECK", 42, &args).expect("encode");
        let (_, _, fields) = parse(&line);
        assert_eq!(fields.len(), n);
    }
}

#[test]
fn encoding_is_deterministic_for_pinned_timestamps() {
    let args = vec![Arg::Text("web01".into()), Arg::Integer(7)];
    let first = encode("DELAY_HOST_NOTIFICATION", 99, &args).expect("encode");
    for _ in 0..10 {
        assert_eq!(encode("DELAY_HOST_NOTIFICATION", 99, &args).expect("encode"), first);
    }
}

#[test]
fn unset_timestamps_are_non_decreasing_and_args_stable() {
    let args = vec![Arg::Text("web01".into())];
    let first = encode("ENABLE_HOST_CHECK", 0, &args).expect("encode");
    std::thread::sleep(std::time::Duration::from_millis(10));
    let second = encode("ENABLE_HOST_CHECK", 0, &args).expect("encode");

    let (t1, name1, fields1) = parse(&first);
    let (t2, name2, fields2) = parse(&second);
    assert!(t2 >= t1);
    assert_eq!(name1, name2);
    assert_eq!(fields1, fields2);
}

#[test]
fn hostile_fields_are_rejected_not_escaped() {
    let separator = vec![Arg::Text("a;b".into())];
    assert!(matches!(
        encode("ADD_HOST_COMMENT", 1, &separator),
        Err(EncodeError::SeparatorInField { index: 0 })
    ));

    let newline = vec![Arg::Text("ok".into()), Arg::Text("a\nb".into())];
    assert!(matches!(
        encode("ADD_HOST_COMMENT", 1, &newline),
        Err(EncodeError::NewlineInField { index: 1 })
    ));

    // Nothing silently stripped: a benign variant of the same text encodes.
    let benign = vec![Arg::Text("ok".into()), Arg::Text("a b".into())];
    let line = encode("ADD_HOST_COMMENT", 1, &benign).expect("encode");
    assert_eq!(line, "[1] ADD_HOST_COMMENT;ok;a b\n");
}
