//! Declarative catalog of the daemon's external commands.
//!
//! Every command the daemon understands is declared exactly once in the
//! [`commands!`] invocation below: its wire token plus the ordered, typed
//! parameter list from the daemon's documented positional signature. The
//! macro expands that single declaration into both the static [`CATALOG`]
//! table (consumed by the generic [`Dispatcher::dispatch_by_name`] path) and
//! one typed helper method per command on [`Dispatcher`].
//!
//! Field order is the catalog's correctness property: a reordered signature
//! still produces a structurally valid line that the daemon accepts and
//! silently misinterprets. Single-sourcing the declaration keeps the table
//! and the typed surface from drifting apart, and `tests/catalog_order.rs`
//! checks every entry's emitted field order against its declared signature.

use crate::command::{Arg, Command};
use crate::dispatch::Dispatcher;
use crate::error::{Error, Result};

/// Kind tag for one positional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    Text,
    Flag,
}

impl ParamKind {
    pub const fn label(self) -> &'static str {
        match self {
            ParamKind::Integer => "an integer",
            ParamKind::Text => "text",
            ParamKind::Flag => "a 0/1 flag",
        }
    }

    /// Whether an argument satisfies this kind.
    ///
    /// `Integer(0|1)` is accepted where a flag is declared: the wire forms
    /// are identical and operator tooling commonly passes raw 0/1.
    pub fn accepts(self, arg: &Arg) -> bool {
        match (self, arg) {
            (ParamKind::Integer, Arg::Integer(_)) => true,
            (ParamKind::Text, Arg::Text(_)) => true,
            (ParamKind::Flag, Arg::Flag(_)) => true,
            (ParamKind::Flag, Arg::Integer(v)) => *v == 0 || *v == 1,
            _ => false,
        }
    }
}

/// One named positional parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// One catalog entry: a wire token and its positional signature.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub token: &'static str,
    pub params: &'static [ParamSpec],
}

impl CommandSpec {
    /// Validates arity and per-position kinds against this signature.
    pub fn check(&self, args: &[Arg]) -> Result<()> {
        if args.len() != self.params.len() {
            return Err(Error::ArityMismatch {
                token: self.token,
                expected: self.params.len(),
                given: args.len(),
            });
        }
        for (index, (param, arg)) in self.params.iter().zip(args).enumerate() {
            if !param.kind.accepts(arg) {
                return Err(Error::KindMismatch {
                    token: self.token,
                    index,
                    name: param.name,
                    kind: param.kind.label(),
                });
            }
        }
        Ok(())
    }
}

/// Looks a wire token up in the catalog.
pub fn lookup(token: &str) -> Option<&'static CommandSpec> {
    CATALOG.iter().find(|spec| spec.token == token)
}

impl Dispatcher {
    /// Generic dispatch path: looks `token` up, validates `args` against the
    /// declared signature, then dispatches.
    pub fn dispatch_by_name(&self, token: &str, args: &[Arg]) -> Result<()> {
        let spec = lookup(token).ok_or_else(|| Error::UnknownCommand(token.to_string()))?;
        spec.check(args)?;
        let cmd = Command::new(spec.token).args(args.iter().cloned());
        self.dispatch(&cmd)
    }
}

macro_rules! param_ty {
    (Integer) => { i64 };
    (Text) => { &str };
    (Flag) => { bool };
}

macro_rules! arg_value {
    (Integer, $v:expr) => {
        Arg::Integer($v)
    };
    (Text, $v:expr) => {
        Arg::Text($v.to_string())
    };
    (Flag, $v:expr) => {
        Arg::Flag($v)
    };
}

macro_rules! commands {
    ($(
        $(#[$meta:meta])*
        $fname:ident => $token:ident ( $( $pname:ident : $kind:ident ),* );
    )*) => {
        /// Every declared command, in catalog order.
        pub static CATALOG: &[CommandSpec] = &[
            $(
                CommandSpec {
                    token: stringify!($token),
                    params: &[
                        $( ParamSpec { name: stringify!($pname), kind: ParamKind::$kind } ),*
                    ],
                },
            )*
        ];

        impl Dispatcher {
            $(
                $(#[$meta])*
                pub fn $fname(&self $(, $pname: param_ty!($kind) )* ) -> Result<()> {
                    self.dispatch(
                        &Command::new(stringify!($token))
                            $( .arg(arg_value!($kind, $pname)) )*
                    )
                }
            )*
        }
    };
}

commands! {
    // Program control.
    shutdown_program => SHUTDOWN_PROGRAM();
    restart_program => RESTART_PROGRAM();
    save_state_information => SAVE_STATE_INFORMATION();
    read_state_information => READ_STATE_INFORMATION();
    /// Tells the daemon to process an externally-written command file, and
    /// optionally delete it afterwards.
    process_file => PROCESS_FILE(file_name: Text, delete: Flag);
    enable_notifications => ENABLE_NOTIFICATIONS();
    disable_notifications => DISABLE_NOTIFICATIONS();
    enable_event_handlers => ENABLE_EVENT_HANDLERS();
    disable_event_handlers => DISABLE_EVENT_HANDLERS();
    enable_flap_detection => ENABLE_FLAP_DETECTION();
    disable_flap_detection => DISABLE_FLAP_DETECTION();
    enable_failure_prediction => ENABLE_FAILURE_PREDICTION();
    disable_failure_prediction => DISABLE_FAILURE_PREDICTION();
    enable_performance_data => ENABLE_PERFORMANCE_DATA();
    disable_performance_data => DISABLE_PERFORMANCE_DATA();
    start_executing_host_checks => START_EXECUTING_HOST_CHECKS();
    stop_executing_host_checks => STOP_EXECUTING_HOST_CHECKS();
    start_executing_svc_checks => START_EXECUTING_SVC_CHECKS();
    stop_executing_svc_checks => STOP_EXECUTING_SVC_CHECKS();
    start_accepting_passive_host_checks => START_ACCEPTING_PASSIVE_HOST_CHECKS();
    stop_accepting_passive_host_checks => STOP_ACCEPTING_PASSIVE_HOST_CHECKS();
    start_accepting_passive_svc_checks => START_ACCEPTING_PASSIVE_SVC_CHECKS();
    stop_accepting_passive_svc_checks => STOP_ACCEPTING_PASSIVE_SVC_CHECKS();
    start_obsessing_over_host_checks => START_OBSESSING_OVER_HOST_CHECKS();
    stop_obsessing_over_host_checks => STOP_OBSESSING_OVER_HOST_CHECKS();
    start_obsessing_over_svc_checks => START_OBSESSING_OVER_SVC_CHECKS();
    stop_obsessing_over_svc_checks => STOP_OBSESSING_OVER_SVC_CHECKS();
    enable_service_freshness_checks => ENABLE_SERVICE_FRESHNESS_CHECKS();
    disable_service_freshness_checks => DISABLE_SERVICE_FRESHNESS_CHECKS();
    enable_host_freshness_checks => ENABLE_HOST_FRESHNESS_CHECKS();
    disable_host_freshness_checks => DISABLE_HOST_FRESHNESS_CHECKS();
    change_global_host_event_handler => CHANGE_GLOBAL_HOST_EVENT_HANDLER(event_handler_command: Text);
    change_global_svc_event_handler => CHANGE_GLOBAL_SVC_EVENT_HANDLER(event_handler_command: Text);

    // Host comments and acknowledgements.
    add_host_comment => ADD_HOST_COMMENT(host_name: Text, persistent: Flag, author: Text, comment: Text);
    del_host_comment => DEL_HOST_COMMENT(comment_id: Integer);
    del_all_host_comments => DEL_ALL_HOST_COMMENTS(host_name: Text);
    /// Acknowledges a host problem. `sticky` is 0 (none), 1 (normal) or
    /// 2 (until recovery); `notify` and `persistent` are flags.
    acknowledge_host_problem => ACKNOWLEDGE_HOST_PROBLEM(host_name: Text, sticky: Integer, notify: Flag, persistent: Flag, author: Text, comment: Text);
    remove_host_acknowledgement => REMOVE_HOST_ACKNOWLEDGEMENT(host_name: Text);

    // Host checks and notifications.
    delay_host_notification => DELAY_HOST_NOTIFICATION(host_name: Text, notification_time: Integer);
    schedule_host_check => SCHEDULE_HOST_CHECK(host_name: Text, check_time: Integer);
    schedule_forced_host_check => SCHEDULE_FORCED_HOST_CHECK(host_name: Text, check_time: Integer);
    schedule_host_svc_checks => SCHEDULE_HOST_SVC_CHECKS(host_name: Text, check_time: Integer);
    schedule_forced_host_svc_checks => SCHEDULE_FORCED_HOST_SVC_CHECKS(host_name: Text, check_time: Integer);
    enable_host_check => ENABLE_HOST_CHECK(host_name: Text);
    disable_host_check => DISABLE_HOST_CHECK(host_name: Text);
    enable_passive_host_checks => ENABLE_PASSIVE_HOST_CHECKS(host_name: Text);
    disable_passive_host_checks => DISABLE_PASSIVE_HOST_CHECKS(host_name: Text);
    enable_host_notifications => ENABLE_HOST_NOTIFICATIONS(host_name: Text);
    disable_host_notifications => DISABLE_HOST_NOTIFICATIONS(host_name: Text);
    enable_all_notifications_beyond_host => ENABLE_ALL_NOTIFICATIONS_BEYOND_HOST(host_name: Text);
    disable_all_notifications_beyond_host => DISABLE_ALL_NOTIFICATIONS_BEYOND_HOST(host_name: Text);
    enable_host_and_child_notifications => ENABLE_HOST_AND_CHILD_NOTIFICATIONS(host_name: Text);
    disable_host_and_child_notifications => DISABLE_HOST_AND_CHILD_NOTIFICATIONS(host_name: Text);
    enable_host_svc_checks => ENABLE_HOST_SVC_CHECKS(host_name: Text);
    disable_host_svc_checks => DISABLE_HOST_SVC_CHECKS(host_name: Text);
    enable_host_svc_notifications => ENABLE_HOST_SVC_NOTIFICATIONS(host_name: Text);
    disable_host_svc_notifications => DISABLE_HOST_SVC_NOTIFICATIONS(host_name: Text);
    enable_host_event_handler => ENABLE_HOST_EVENT_HANDLER(host_name: Text);
    disable_host_event_handler => DISABLE_HOST_EVENT_HANDLER(host_name: Text);
    enable_host_flap_detection => ENABLE_HOST_FLAP_DETECTION(host_name: Text);
    disable_host_flap_detection => DISABLE_HOST_FLAP_DETECTION(host_name: Text);
    start_obsessing_over_host => START_OBSESSING_OVER_HOST(host_name: Text);
    stop_obsessing_over_host => STOP_OBSESSING_OVER_HOST(host_name: Text);
    /// Submits a passive host check result. `status_code` is 0 (up),
    /// 1 (down) or 2 (unreachable).
    process_host_check_result => PROCESS_HOST_CHECK_RESULT(host_name: Text, status_code: Integer, plugin_output: Text);
    change_host_event_handler => CHANGE_HOST_EVENT_HANDLER(host_name: Text, event_handler_command: Text);
    change_host_check_command => CHANGE_HOST_CHECK_COMMAND(host_name: Text, check_command: Text);
    change_normal_host_check_interval => CHANGE_NORMAL_HOST_CHECK_INTERVAL(host_name: Text, check_interval: Integer);
    change_retry_host_check_interval => CHANGE_RETRY_HOST_CHECK_INTERVAL(host_name: Text, check_interval: Integer);
    change_max_host_check_attempts => CHANGE_MAX_HOST_CHECK_ATTEMPTS(host_name: Text, check_attempts: Integer);
    change_host_check_timeperiod => CHANGE_HOST_CHECK_TIMEPERIOD(host_name: Text, timeperiod: Text);
    change_host_notification_timeperiod => CHANGE_HOST_NOTIFICATION_TIMEPERIOD(host_name: Text, timeperiod: Text);
    change_host_modattr => CHANGE_HOST_MODATTR(host_name: Text, value: Integer);
    change_custom_host_var => CHANGE_CUSTOM_HOST_VAR(host_name: Text, varname: Text, varvalue: Text);
    set_host_notification_number => SET_HOST_NOTIFICATION_NUMBER(host_name: Text, notification_number: Integer);
    send_custom_host_notification => SEND_CUSTOM_HOST_NOTIFICATION(host_name: Text, options: Integer, author: Text, comment: Text);

    // Host downtime.
    /// Schedules downtime for a host. `fixed` distinguishes fixed from
    /// flexible downtime; a flexible downtime lasts `duration` seconds from
    /// whenever the host next goes down inside the window.
    schedule_host_downtime => SCHEDULE_HOST_DOWNTIME(host_name: Text, start_time: Integer, end_time: Integer, fixed: Flag, trigger_id: Integer, duration: Integer, author: Text, comment: Text);
    schedule_host_svc_downtime => SCHEDULE_HOST_SVC_DOWNTIME(host_name: Text, start_time: Integer, end_time: Integer, fixed: Flag, trigger_id: Integer, duration: Integer, author: Text, comment: Text);
    schedule_and_propagate_host_downtime => SCHEDULE_AND_PROPAGATE_HOST_DOWNTIME(host_name: Text, start_time: Integer, end_time: Integer, fixed: Flag, trigger_id: Integer, duration: Integer, author: Text, comment: Text);
    schedule_and_propagate_triggered_host_downtime => SCHEDULE_AND_PROPAGATE_TRIGGERED_HOST_DOWNTIME(host_name: Text, start_time: Integer, end_time: Integer, fixed: Flag, trigger_id: Integer, duration: Integer, author: Text, comment: Text);
    del_host_downtime => DEL_HOST_DOWNTIME(downtime_id: Integer);
    del_downtime_by_host_name => DEL_DOWNTIME_BY_HOST_NAME(host_name: Text);
    del_downtime_by_hostgroup_name => DEL_DOWNTIME_BY_HOSTGROUP_NAME(hostgroup_name: Text);
    del_downtime_by_start_time_comment => DEL_DOWNTIME_BY_START_TIME_COMMENT(start_time: Integer, comment: Text);

    // Service comments and acknowledgements.
    add_svc_comment => ADD_SVC_COMMENT(host_name: Text, service_description: Text, persistent: Flag, author: Text, comment: Text);
    del_svc_comment => DEL_SVC_COMMENT(comment_id: Integer);
    del_all_svc_comments => DEL_ALL_SVC_COMMENTS(host_name: Text, service_description: Text);
    acknowledge_svc_problem => ACKNOWLEDGE_SVC_PROBLEM(host_name: Text, service_description: Text, sticky: Integer, notify: Flag, persistent: Flag, author: Text, comment: Text);
    remove_svc_acknowledgement => REMOVE_SVC_ACKNOWLEDGEMENT(host_name: Text, service_description: Text);

    // Service checks and notifications.
    delay_svc_notification => DELAY_SVC_NOTIFICATION(host_name: Text, service_description: Text, notification_time: Integer);
    schedule_svc_check => SCHEDULE_SVC_CHECK(host_name: Text, service_description: Text, check_time: Integer);
    schedule_forced_svc_check => SCHEDULE_FORCED_SVC_CHECK(host_name: Text, service_description: Text, check_time: Integer);
    enable_svc_check => ENABLE_SVC_CHECK(host_name: Text, service_description: Text);
    disable_svc_check => DISABLE_SVC_CHECK(host_name: Text, service_description: Text);
    enable_passive_svc_checks => ENABLE_PASSIVE_SVC_CHECKS(host_name: Text, service_description: Text);
    disable_passive_svc_checks => DISABLE_PASSIVE_SVC_CHECKS(host_name: Text, service_description: Text);
    enable_svc_notifications => ENABLE_SVC_NOTIFICATIONS(host_name: Text, service_description: Text);
    disable_svc_notifications => DISABLE_SVC_NOTIFICATIONS(host_name: Text, service_description: Text);
    enable_svc_event_handler => ENABLE_SVC_EVENT_HANDLER(host_name: Text, service_description: Text);
    disable_svc_event_handler => DISABLE_SVC_EVENT_HANDLER(host_name: Text, service_description: Text);
    enable_svc_flap_detection => ENABLE_SVC_FLAP_DETECTION(host_name: Text, service_description: Text);
    disable_svc_flap_detection => DISABLE_SVC_FLAP_DETECTION(host_name: Text, service_description: Text);
    start_obsessing_over_svc => START_OBSESSING_OVER_SVC(host_name: Text, service_description: Text);
    stop_obsessing_over_svc => STOP_OBSESSING_OVER_SVC(host_name: Text, service_description: Text);
    /// Submits a passive service check result. `return_code` is 0 (ok),
    /// 1 (warning), 2 (critical) or 3 (unknown).
    process_service_check_result => PROCESS_SERVICE_CHECK_RESULT(host_name: Text, service_description: Text, return_code: Integer, plugin_output: Text);
    change_svc_event_handler => CHANGE_SVC_EVENT_HANDLER(host_name: Text, service_description: Text, event_handler_command: Text);
    change_svc_check_command => CHANGE_SVC_CHECK_COMMAND(host_name: Text, service_description: Text, check_command: Text);
    change_normal_svc_check_interval => CHANGE_NORMAL_SVC_CHECK_INTERVAL(host_name: Text, service_description: Text, check_interval: Integer);
    change_retry_svc_check_interval => CHANGE_RETRY_SVC_CHECK_INTERVAL(host_name: Text, service_description: Text, check_interval: Integer);
    change_max_svc_check_attempts => CHANGE_MAX_SVC_CHECK_ATTEMPTS(host_name: Text, service_description: Text, check_attempts: Integer);
    change_svc_check_timeperiod => CHANGE_SVC_CHECK_TIMEPERIOD(host_name: Text, service_description: Text, timeperiod: Text);
    change_svc_notification_timeperiod => CHANGE_SVC_NOTIFICATION_TIMEPERIOD(host_name: Text, service_description: Text, timeperiod: Text);
    change_svc_modattr => CHANGE_SVC_MODATTR(host_name: Text, service_description: Text, value: Integer);
    change_custom_svc_var => CHANGE_CUSTOM_SVC_VAR(host_name: Text, service_description: Text, varname: Text, varvalue: Text);
    set_svc_notification_number => SET_SVC_NOTIFICATION_NUMBER(host_name: Text, service_description: Text, notification_number: Integer);
    send_custom_svc_notification => SEND_CUSTOM_SVC_NOTIFICATION(host_name: Text, service_description: Text, options: Integer, author: Text, comment: Text);

    // Service downtime.
    schedule_svc_downtime => SCHEDULE_SVC_DOWNTIME(host_name: Text, service_description: Text, start_time: Integer, end_time: Integer, fixed: Flag, trigger_id: Integer, duration: Integer, author: Text, comment: Text);
    del_svc_downtime => DEL_SVC_DOWNTIME(downtime_id: Integer);

    // Hostgroups.
    enable_hostgroup_host_checks => ENABLE_HOSTGROUP_HOST_CHECKS(hostgroup_name: Text);
    disable_hostgroup_host_checks => DISABLE_HOSTGROUP_HOST_CHECKS(hostgroup_name: Text);
    enable_hostgroup_svc_checks => ENABLE_HOSTGROUP_SVC_CHECKS(hostgroup_name: Text);
    disable_hostgroup_svc_checks => DISABLE_HOSTGROUP_SVC_CHECKS(hostgroup_name: Text);
    enable_hostgroup_host_notifications => ENABLE_HOSTGROUP_HOST_NOTIFICATIONS(hostgroup_name: Text);
    disable_hostgroup_host_notifications => DISABLE_HOSTGROUP_HOST_NOTIFICATIONS(hostgroup_name: Text);
    enable_hostgroup_svc_notifications => ENABLE_HOSTGROUP_SVC_NOTIFICATIONS(hostgroup_name: Text);
    disable_hostgroup_svc_notifications => DISABLE_HOSTGROUP_SVC_NOTIFICATIONS(hostgroup_name: Text);
    enable_hostgroup_passive_host_checks => ENABLE_HOSTGROUP_PASSIVE_HOST_CHECKS(hostgroup_name: Text);
    disable_hostgroup_passive_host_checks => DISABLE_HOSTGROUP_PASSIVE_HOST_CHECKS(hostgroup_name: Text);
    enable_hostgroup_passive_svc_checks => ENABLE_HOSTGROUP_PASSIVE_SVC_CHECKS(hostgroup_name: Text);
    disable_hostgroup_passive_svc_checks => DISABLE_HOSTGROUP_PASSIVE_SVC_CHECKS(hostgroup_name: Text);
    schedule_hostgroup_host_downtime => SCHEDULE_HOSTGROUP_HOST_DOWNTIME(hostgroup_name: Text, start_time: Integer, end_time: Integer, fixed: Flag, trigger_id: Integer, duration: Integer, author: Text, comment: Text);
    schedule_hostgroup_svc_downtime => SCHEDULE_HOSTGROUP_SVC_DOWNTIME(hostgroup_name: Text, start_time: Integer, end_time: Integer, fixed: Flag, trigger_id: Integer, duration: Integer, author: Text, comment: Text);

    // Servicegroups.
    enable_servicegroup_host_checks => ENABLE_SERVICEGROUP_HOST_CHECKS(servicegroup_name: Text);
    disable_servicegroup_host_checks => DISABLE_SERVICEGROUP_HOST_CHECKS(servicegroup_name: Text);
    enable_servicegroup_svc_checks => ENABLE_SERVICEGROUP_SVC_CHECKS(servicegroup_name: Text);
    disable_servicegroup_svc_checks => DISABLE_SERVICEGROUP_SVC_CHECKS(servicegroup_name: Text);
    enable_servicegroup_host_notifications => ENABLE_SERVICEGROUP_HOST_NOTIFICATIONS(servicegroup_name: Text);
    disable_servicegroup_host_notifications => DISABLE_SERVICEGROUP_HOST_NOTIFICATIONS(servicegroup_name: Text);
    enable_servicegroup_svc_notifications => ENABLE_SERVICEGROUP_SVC_NOTIFICATIONS(servicegroup_name: Text);
    disable_servicegroup_svc_notifications => DISABLE_SERVICEGROUP_SVC_NOTIFICATIONS(servicegroup_name: Text);
    enable_servicegroup_passive_host_checks => ENABLE_SERVICEGROUP_PASSIVE_HOST_CHECKS(servicegroup_name: Text);
    disable_servicegroup_passive_host_checks => DISABLE_SERVICEGROUP_PASSIVE_HOST_CHECKS(servicegroup_name: Text);
    enable_servicegroup_passive_svc_checks => ENABLE_SERVICEGROUP_PASSIVE_SVC_CHECKS(servicegroup_name: Text);
    disable_servicegroup_passive_svc_checks => DISABLE_SERVICEGROUP_PASSIVE_SVC_CHECKS(servicegroup_name: Text);
    schedule_servicegroup_host_downtime => SCHEDULE_SERVICEGROUP_HOST_DOWNTIME(servicegroup_name: Text, start_time: Integer, end_time: Integer, fixed: Flag, trigger_id: Integer, duration: Integer, author: Text, comment: Text);
    schedule_servicegroup_svc_downtime => SCHEDULE_SERVICEGROUP_SVC_DOWNTIME(servicegroup_name: Text, start_time: Integer, end_time: Integer, fixed: Flag, trigger_id: Integer, duration: Integer, author: Text, comment: Text);

    // Contacts and contact groups.
    enable_contact_host_notifications => ENABLE_CONTACT_HOST_NOTIFICATIONS(contact_name: Text);
    disable_contact_host_notifications => DISABLE_CONTACT_HOST_NOTIFICATIONS(contact_name: Text);
    enable_contact_svc_notifications => ENABLE_CONTACT_SVC_NOTIFICATIONS(contact_name: Text);
    disable_contact_svc_notifications => DISABLE_CONTACT_SVC_NOTIFICATIONS(contact_name: Text);
    change_contact_host_notification_timeperiod => CHANGE_CONTACT_HOST_NOTIFICATION_TIMEPERIOD(contact_name: Text, timeperiod: Text);
    change_contact_svc_notification_timeperiod => CHANGE_CONTACT_SVC_NOTIFICATION_TIMEPERIOD(contact_name: Text, timeperiod: Text);
    change_contact_modattr => CHANGE_CONTACT_MODATTR(contact_name: Text, value: Integer);
    change_contact_modhattr => CHANGE_CONTACT_MODHATTR(contact_name: Text, value: Integer);
    change_contact_modsattr => CHANGE_CONTACT_MODSATTR(contact_name: Text, value: Integer);
    change_custom_contact_var => CHANGE_CUSTOM_CONTACT_VAR(contact_name: Text, varname: Text, varvalue: Text);
    enable_contactgroup_host_notifications => ENABLE_CONTACTGROUP_HOST_NOTIFICATIONS(contactgroup_name: Text);
    disable_contactgroup_host_notifications => DISABLE_CONTACTGROUP_HOST_NOTIFICATIONS(contactgroup_name: Text);
    enable_contactgroup_svc_notifications => ENABLE_CONTACTGROUP_SVC_NOTIFICATIONS(contactgroup_name: Text);
    disable_contactgroup_svc_notifications => DISABLE_CONTACTGROUP_SVC_NOTIFICATIONS(contactgroup_name: Text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_declared_tokens() {
        let spec = lookup("SCHEDULE_HOST_DOWNTIME").expect("known token");
        assert_eq!(spec.params.len(), 8);
        assert_eq!(spec.params[0].name, "host_name");
        assert_eq!(spec.params[3].name, "fixed");
        assert!(lookup("NOT_A_COMMAND").is_none());
    }

    #[test]
    fn check_rejects_wrong_arity() {
        let spec = lookup("DEL_HOST_COMMENT").expect("known token");
        let err = spec.check(&[]).unwrap_err();
        assert!(matches!(
            err,
            Error::ArityMismatch {
                expected: 1,
                given: 0,
                ..
            }
        ));
    }

    #[test]
    fn check_rejects_wrong_kind() {
        let spec = lookup("DEL_HOST_COMMENT").expect("known token");
        let err = spec.check(&[Arg::Text("one".into())]).unwrap_err();
        assert!(matches!(err, Error::KindMismatch { index: 0, .. }));
    }

    #[test]
    fn flag_positions_accept_zero_one_integers() {
        let spec = lookup("PROCESS_FILE").expect("known token");
        spec.check(&[Arg::Text("/tmp/x".into()), Arg::Integer(1)])
            .expect("0/1 integer in a flag slot");
        assert!(spec
            .check(&[Arg::Text("/tmp/x".into()), Arg::Integer(2)])
            .is_err());
    }

    #[test]
    fn tokens_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.token, b.token, "duplicate catalog token");
            }
        }
    }
}
