//! Read-only reference tables for the daemon's object and config schema.
//!
//! Two compiled-in dictionaries: per-object-type attribute specs and
//! main-config directive specs. The dispatch core itself only consults the
//! directive table (the resolver's `command_file` lookup); the rest exists
//! for validation and editing collaborators.

/// One attribute of an object definition.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub required: bool,
    /// Expected value shape, in the daemon documentation's notation.
    pub format: &'static str,
    pub doc: &'static str,
}

/// Attribute table for one object type.
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    pub object: &'static str,
    pub attributes: &'static [AttributeSpec],
}

/// One main-config directive.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub format: &'static str,
    /// Enumerated values, where the directive has a closed set.
    pub options: &'static [&'static str],
    pub doc: &'static str,
}

/// Attribute table for `object`, if it is a known object type.
pub fn object_schema(object: &str) -> Option<&'static ObjectSchema> {
    OBJECT_SCHEMAS.iter().find(|schema| schema.object == object)
}

/// One attribute of one object type.
pub fn attribute(object: &str, name: &str) -> Option<&'static AttributeSpec> {
    object_schema(object)?
        .attributes
        .iter()
        .find(|attr| attr.name == name)
}

/// Directive record for `name`, if it is a known main-config directive.
pub fn directive(name: &str) -> Option<&'static DirectiveSpec> {
    DIRECTIVES.iter().find(|spec| spec.name == name)
}

const fn req(name: &'static str, format: &'static str, doc: &'static str) -> AttributeSpec {
    AttributeSpec {
        name,
        required: true,
        format,
        doc,
    }
}

const fn opt(name: &'static str, format: &'static str, doc: &'static str) -> AttributeSpec {
    AttributeSpec {
        name,
        required: false,
        format,
        doc,
    }
}

pub static OBJECT_SCHEMAS: &[ObjectSchema] = &[
    ObjectSchema {
        object: "host",
        attributes: &[
            req("host_name", "host_name", "short name used to reference the host"),
            req("alias", "alias", "longer name or description"),
            req("address", "address", "IP address or resolvable name"),
            opt("display_name", "display_name", "alternate name shown in interfaces"),
            opt("parents", "host_names", "comma-separated parent hosts"),
            opt("hostgroups", "hostgroup_names", "hostgroups this host belongs to"),
            opt("check_command", "command_name", "command used to check the host"),
            opt("initial_state", "[o,d,u]", "state assumed before the first check"),
            req("max_check_attempts", "#", "retries before a hard state is reached"),
            opt("check_interval", "#", "minutes between regular checks"),
            opt("retry_interval", "#", "minutes between retries in a soft state"),
            opt("active_checks_enabled", "[0/1]", "whether active checks run"),
            opt("passive_checks_enabled", "[0/1]", "whether passive results are accepted"),
            req("check_period", "timeperiod_name", "timeperiod during which checks run"),
            opt("obsess_over_host", "[0/1]", "whether the OCHP command runs"),
            opt("check_freshness", "[0/1]", "whether passive results are freshness-checked"),
            opt("freshness_threshold", "#", "seconds before a result goes stale"),
            opt("event_handler", "command_name", "command run on state changes"),
            opt("event_handler_enabled", "[0/1]", "whether the event handler runs"),
            opt("low_flap_threshold", "#", "flap detection low water mark"),
            opt("high_flap_threshold", "#", "flap detection high water mark"),
            opt("flap_detection_enabled", "[0/1]", "whether flap detection runs"),
            opt("process_perf_data", "[0/1]", "whether performance data is processed"),
            opt("retain_status_information", "[0/1]", "status retained across restarts"),
            opt("retain_nonstatus_information", "[0/1]", "non-status retained across restarts"),
            req("contacts", "contacts", "contacts notified about this host"),
            req("contact_groups", "contact_groups", "contact groups notified about this host"),
            req("notification_interval", "#", "minutes between repeated notifications"),
            req("notification_period", "timeperiod_name", "timeperiod during which notifications go out"),
            opt("notification_options", "[d,u,r,f,s]", "states that trigger notifications"),
            opt("notifications_enabled", "[0/1]", "whether notifications go out at all"),
            opt("stalking_options", "[o,d,u]", "states whose output changes are logged"),
            opt("register", "[0/1]", "0 marks a template definition"),
        ],
    },
    ObjectSchema {
        object: "service",
        attributes: &[
            req("host_name", "host_name", "host the service runs on"),
            opt("hostgroup_name", "hostgroup_name", "hostgroups whose hosts all get this service"),
            req("service_description", "service_description", "description used to reference the service"),
            opt("display_name", "display_name", "alternate name shown in interfaces"),
            opt("servicegroups", "servicegroup_names", "servicegroups this service belongs to"),
            opt("is_volatile", "[0/1]", "whether every problem result is treated as new"),
            req("check_command", "command_name", "command used to check the service"),
            opt("initial_state", "[o,w,u,c]", "state assumed before the first check"),
            req("max_check_attempts", "#", "retries before a hard state is reached"),
            req("check_interval", "#", "minutes between regular checks"),
            req("retry_interval", "#", "minutes between retries in a soft state"),
            opt("active_checks_enabled", "[0/1]", "whether active checks run"),
            opt("passive_checks_enabled", "[0/1]", "whether passive results are accepted"),
            req("check_period", "timeperiod_name", "timeperiod during which checks run"),
            opt("obsess_over_service", "[0/1]", "whether the OCSP command runs"),
            opt("check_freshness", "[0/1]", "whether passive results are freshness-checked"),
            opt("freshness_threshold", "#", "seconds before a result goes stale"),
            opt("event_handler", "command_name", "command run on state changes"),
            opt("event_handler_enabled", "[0/1]", "whether the event handler runs"),
            opt("low_flap_threshold", "#", "flap detection low water mark"),
            opt("high_flap_threshold", "#", "flap detection high water mark"),
            opt("flap_detection_enabled", "[0/1]", "whether flap detection runs"),
            opt("process_perf_data", "[0/1]", "whether performance data is processed"),
            opt("retain_status_information", "[0/1]", "status retained across restarts"),
            opt("retain_nonstatus_information", "[0/1]", "non-status retained across restarts"),
            req("notification_interval", "#", "minutes between repeated notifications"),
            req("notification_period", "timeperiod_name", "timeperiod during which notifications go out"),
            opt("notification_options", "[w,u,c,r,f,s]", "states that trigger notifications"),
            opt("notifications_enabled", "[0/1]", "whether notifications go out at all"),
            req("contacts", "contacts", "contacts notified about this service"),
            req("contact_groups", "contact_groups", "contact groups notified about this service"),
            opt("stalking_options", "[o,w,u,c]", "states whose output changes are logged"),
            opt("register", "[0/1]", "0 marks a template definition"),
        ],
    },
    ObjectSchema {
        object: "contact",
        attributes: &[
            req("contact_name", "contact_name", "short name used to reference the contact"),
            opt("alias", "alias", "longer name or description"),
            opt("contactgroups", "contactgroup_names", "groups this contact belongs to"),
            req("host_notifications_enabled", "[0/1]", "whether host notifications are sent"),
            req("service_notifications_enabled", "[0/1]", "whether service notifications are sent"),
            req("host_notification_period", "timeperiod_name", "when host notifications may be sent"),
            req("service_notification_period", "timeperiod_name", "when service notifications may be sent"),
            req("host_notification_options", "[d,u,r,f,s,n]", "host states notified about"),
            req("service_notification_options", "[w,u,c,r,f,s,n]", "service states notified about"),
            req("host_notification_commands", "command_names", "commands used for host notifications"),
            req("service_notification_commands", "command_names", "commands used for service notifications"),
            opt("email", "email_address", "email address"),
            opt("pager", "pager_number", "pager number or pager email gateway"),
            opt("can_submit_commands", "[0/1]", "whether the contact may submit external commands"),
            opt("retain_status_information", "[0/1]", "status retained across restarts"),
            opt("register", "[0/1]", "0 marks a template definition"),
        ],
    },
    ObjectSchema {
        object: "contactgroup",
        attributes: &[
            req("contactgroup_name", "contactgroup_name", "short name used to reference the group"),
            req("alias", "alias", "longer name or description"),
            opt("members", "contacts", "contacts in the group"),
            opt("contactgroup_members", "contactgroups", "groups whose members are included"),
        ],
    },
    ObjectSchema {
        object: "hostgroup",
        attributes: &[
            req("hostgroup_name", "hostgroup_name", "short name used to reference the group"),
            req("alias", "alias", "longer name or description"),
            opt("members", "hosts", "hosts in the group"),
            opt("hostgroup_members", "hostgroups", "groups whose members are included"),
            opt("notes", "note_string", "notes shown in interfaces"),
            opt("notes_url", "url", "URL with more information about the group"),
        ],
    },
    ObjectSchema {
        object: "servicegroup",
        attributes: &[
            req("servicegroup_name", "servicegroup_name", "short name used to reference the group"),
            req("alias", "alias", "longer name or description"),
            opt("members", "services", "host,service pairs in the group"),
            opt("servicegroup_members", "servicegroups", "groups whose members are included"),
            opt("notes", "note_string", "notes shown in interfaces"),
            opt("notes_url", "url", "URL with more information about the group"),
        ],
    },
    ObjectSchema {
        object: "timeperiod",
        attributes: &[
            req("timeperiod_name", "timeperiod_name", "short name used to reference the timeperiod"),
            req("alias", "alias", "longer name or description"),
            opt("exclude", "timeperiod_names", "timeperiods subtracted from this one"),
        ],
    },
    ObjectSchema {
        object: "command",
        attributes: &[
            req("command_name", "command_name", "short name used to reference the command"),
            req("command_line", "command_line", "command line executed, with macros"),
        ],
    },
    ObjectSchema {
        object: "hostdependency",
        attributes: &[
            req("dependent_host_name", "host_name", "host that depends on another"),
            opt("dependent_hostgroup_name", "hostgroup_name", "group of dependent hosts"),
            req("host_name", "host_name", "host being depended on"),
            opt("hostgroup_name", "hostgroup_name", "group of hosts being depended on"),
            opt("inherits_parent", "[0/1]", "whether the master's dependencies apply too"),
            opt("execution_failure_criteria", "[o,d,u,p,n]", "master states that suppress checks"),
            opt("notification_failure_criteria", "[o,d,u,p,n]", "master states that suppress notifications"),
            opt("dependency_period", "timeperiod_name", "when the dependency is in effect"),
        ],
    },
    ObjectSchema {
        object: "servicedependency",
        attributes: &[
            req("dependent_host_name", "host_name", "host of the dependent service"),
            opt("dependent_hostgroup_name", "hostgroup_name", "group of dependent hosts"),
            req("dependent_service_description", "service_description", "dependent service"),
            req("host_name", "host_name", "host of the service being depended on"),
            opt("hostgroup_name", "hostgroup_name", "group of hosts being depended on"),
            req("service_description", "service_description", "service being depended on"),
            opt("inherits_parent", "[0/1]", "whether the master's dependencies apply too"),
            opt("execution_failure_criteria", "[o,w,u,c,p,n]", "master states that suppress checks"),
            opt("notification_failure_criteria", "[o,w,u,c,p,n]", "master states that suppress notifications"),
            opt("dependency_period", "timeperiod_name", "when the dependency is in effect"),
        ],
    },
    ObjectSchema {
        object: "hostescalation",
        attributes: &[
            req("host_name", "host_name", "host the escalation applies to"),
            opt("hostgroup_name", "hostgroup_name", "group of hosts the escalation applies to"),
            req("contacts", "contacts", "contacts notified at this escalation level"),
            req("contact_groups", "contactgroup_name", "contact groups notified at this level"),
            req("first_notification", "#", "notification number where the escalation starts"),
            req("last_notification", "#", "notification number where it ends, 0 for never"),
            req("notification_interval", "#", "minutes between escalated notifications"),
            opt("escalation_period", "timeperiod_name", "when the escalation is in effect"),
            opt("escalation_options", "[d,u,r]", "states the escalation applies to"),
        ],
    },
    ObjectSchema {
        object: "serviceescalation",
        attributes: &[
            req("host_name", "host_name", "host of the escalated service"),
            opt("hostgroup_name", "hostgroup_name", "group of hosts the escalation applies to"),
            req("service_description", "service_description", "service the escalation applies to"),
            req("contacts", "contacts", "contacts notified at this escalation level"),
            req("contact_groups", "contactgroup_name", "contact groups notified at this level"),
            req("first_notification", "#", "notification number where the escalation starts"),
            req("last_notification", "#", "notification number where it ends, 0 for never"),
            req("notification_interval", "#", "minutes between escalated notifications"),
            opt("escalation_period", "timeperiod_name", "when the escalation is in effect"),
            opt("escalation_options", "[w,u,c,r]", "states the escalation applies to"),
        ],
    },
];

const NO_OPTIONS: &[&str] = &[];

const fn d(
    name: &'static str,
    title: &'static str,
    format: &'static str,
    options: &'static [&'static str],
    doc: &'static str,
) -> DirectiveSpec {
    DirectiveSpec {
        name,
        title,
        format,
        options,
        doc,
    }
}

pub static DIRECTIVES: &[DirectiveSpec] = &[
    d("log_file", "Log File", "log_file=<file_name>", NO_OPTIONS,
      "main log file, where all events are written first"),
    d("cfg_file", "Object Configuration File", "cfg_file=<file_name>", NO_OPTIONS,
      "an object configuration file; may be repeated"),
    d("cfg_dir", "Object Configuration Directory", "cfg_dir=<directory_name>", NO_OPTIONS,
      "directory scanned recursively for object configuration files; may be repeated"),
    d("object_cache_file", "Object Cache File", "object_cache_file=<file_name>", NO_OPTIONS,
      "cached copy of object definitions, rewritten on every (re)start"),
    d("precached_object_file", "Precached Object File", "precached_object_file=<file_name>", NO_OPTIONS,
      "preprocessed object definitions read when -u is given"),
    d("resource_file", "Resource File", "resource_file=<file_name>", NO_OPTIONS,
      "file holding $USERn$ macro definitions; may be repeated"),
    d("temp_file", "Temp File", "temp_file=<file_name>", NO_OPTIONS,
      "scratch file used while updating logs and status data"),
    d("temp_path", "Temp Path", "temp_path=<dir_name>", NO_OPTIONS,
      "directory for temporary scratch files"),
    d("status_file", "Status File", "status_file=<file_name>", NO_OPTIONS,
      "current status of all monitored objects, consumed by the CGIs"),
    d("status_update_interval", "Status Update Interval", "status_update_interval=<seconds>", NO_OPTIONS,
      "seconds between rewrites of the status file"),
    d("nagios_user", "Daemon User", "nagios_user=<username>", NO_OPTIONS,
      "effective user the daemon runs as"),
    d("nagios_group", "Daemon Group", "nagios_group=<groupname>", NO_OPTIONS,
      "effective group the daemon runs as"),
    d("enable_notifications", "Notifications Option", "enable_notifications=<0/1>", &["0", "1"],
      "whether notifications are sent at all (initial program state)"),
    d("execute_service_checks", "Service Check Execution Option", "execute_service_checks=<0/1>", &["0", "1"],
      "whether active service checks are executed"),
    d("accept_passive_service_checks", "Passive Service Check Acceptance Option",
      "accept_passive_service_checks=<0/1>", &["0", "1"],
      "whether passive service check results are accepted"),
    d("execute_host_checks", "Host Check Execution Option", "execute_host_checks=<0/1>", &["0", "1"],
      "whether active host checks are executed"),
    d("accept_passive_host_checks", "Passive Host Check Acceptance Option",
      "accept_passive_host_checks=<0/1>", &["0", "1"],
      "whether passive host check results are accepted"),
    d("enable_event_handlers", "Event Handler Option", "enable_event_handlers=<0/1>", &["0", "1"],
      "whether host and service event handlers run"),
    d("log_rotation_method", "Log Rotation Method", "log_rotation_method=<n/h/d/w/m>",
      &["n", "h", "d", "w", "m"],
      "how often the main log file is rotated"),
    d("log_archive_path", "Log Archive Path", "log_archive_path=<path>", NO_OPTIONS,
      "directory rotated log files are placed in"),
    d("check_external_commands", "External Command Check Option", "check_external_commands=<0/1>",
      &["0", "1"],
      "whether the daemon checks the external command file at all"),
    d("command_check_interval", "External Command Check Interval", "command_check_interval=<minutes>",
      NO_OPTIONS,
      "how often the external command file is checked; -1 means as often as possible"),
    d("command_file", "External Command File", "command_file=<file_name>", NO_OPTIONS,
      "named pipe the daemon polls for external commands; the default dispatch channel"),
    d("external_command_buffer_slots", "External Command Buffer Slots",
      "external_command_buffer_slots=<#>", NO_OPTIONS,
      "commands buffered between the worker thread and the core"),
    d("lock_file", "Lock File", "lock_file=<file_name>", NO_OPTIONS,
      "pid file written when running as a daemon"),
    d("retain_state_information", "State Retention Option", "retain_state_information=<0/1>",
      &["0", "1"],
      "whether state is saved across restarts"),
    d("state_retention_file", "State Retention File", "state_retention_file=<file_name>", NO_OPTIONS,
      "file state information is saved to"),
    d("retention_update_interval", "Automatic State Retention Update Interval",
      "retention_update_interval=<minutes>", NO_OPTIONS,
      "minutes between automatic retention saves; 0 disables"),
    d("use_syslog", "Syslog Logging Option", "use_syslog=<0/1>", &["0", "1"],
      "whether messages are also written to syslog"),
    d("log_notifications", "Notification Logging Option", "log_notifications=<0/1>", &["0", "1"],
      "whether notifications are logged"),
    d("log_service_retries", "Service Check Retry Logging Option", "log_service_retries=<0/1>",
      &["0", "1"],
      "whether service check retries are logged"),
    d("log_host_retries", "Host Check Retry Logging Option", "log_host_retries=<0/1>", &["0", "1"],
      "whether host check retries are logged"),
    d("log_event_handlers", "Event Handler Logging Option", "log_event_handlers=<0/1>", &["0", "1"],
      "whether event handler runs are logged"),
    d("log_initial_states", "Initial State Logging Option", "log_initial_states=<0/1>", &["0", "1"],
      "whether initial host and service states are logged"),
    d("log_external_commands", "External Command Logging Option", "log_external_commands=<0/1>",
      &["0", "1"],
      "whether received external commands are logged"),
    d("log_passive_checks", "Passive Check Logging Option", "log_passive_checks=<0/1>", &["0", "1"],
      "whether passive check results are logged"),
    d("global_host_event_handler", "Global Host Event Handler", "global_host_event_handler=<command>",
      NO_OPTIONS,
      "command run for every host state change, before the host's own handler"),
    d("global_service_event_handler", "Global Service Event Handler",
      "global_service_event_handler=<command>", NO_OPTIONS,
      "command run for every service state change, before the service's own handler"),
    d("service_check_timeout", "Service Check Timeout", "service_check_timeout=<seconds>", NO_OPTIONS,
      "seconds a service check may run before being killed"),
    d("host_check_timeout", "Host Check Timeout", "host_check_timeout=<seconds>", NO_OPTIONS,
      "seconds a host check may run before being killed"),
    d("event_handler_timeout", "Event Handler Timeout", "event_handler_timeout=<seconds>", NO_OPTIONS,
      "seconds an event handler may run before being killed"),
    d("notification_timeout", "Notification Timeout", "notification_timeout=<seconds>", NO_OPTIONS,
      "seconds a notification command may run before being killed"),
    d("process_performance_data", "Performance Data Processing Option",
      "process_performance_data=<0/1>", &["0", "1"],
      "whether performance data processing is enabled"),
    d("check_for_orphaned_services", "Orphaned Service Check Option",
      "check_for_orphaned_services=<0/1>", &["0", "1"],
      "whether orphaned service checks are rescheduled"),
    d("check_service_freshness", "Service Freshness Checking Option", "check_service_freshness=<0/1>",
      &["0", "1"],
      "whether service freshness checks are enabled"),
    d("check_host_freshness", "Host Freshness Checking Option", "check_host_freshness=<0/1>",
      &["0", "1"],
      "whether host freshness checks are enabled"),
    d("enable_flap_detection", "Flap Detection Option", "enable_flap_detection=<0/1>", &["0", "1"],
      "whether state flap detection is enabled"),
    d("date_format", "Date Format", "date_format=<option>",
      &["us", "euro", "iso8601", "strict-iso8601"],
      "how dates are rendered in the web interface and logs"),
    d("use_timezone", "Timezone Option", "use_timezone=<tz>", NO_OPTIONS,
      "timezone the daemon and CGIs run in"),
    d("illegal_object_name_chars", "Illegal Object Name Characters",
      "illegal_object_name_chars=<chars>", NO_OPTIONS,
      "characters forbidden in object names"),
    d("illegal_macro_output_chars", "Illegal Macro Output Characters",
      "illegal_macro_output_chars=<chars>", NO_OPTIONS,
      "characters stripped from macros before command execution"),
    d("admin_email", "Administrator Email Address", "admin_email=<email_address>", NO_OPTIONS,
      "email address of the local administrator, for the $ADMINEMAIL$ macro"),
    d("admin_pager", "Administrator Pager", "admin_pager=<pager_number>", NO_OPTIONS,
      "pager number of the local administrator, for the $ADMINPAGER$ macro"),
    d("event_broker_options", "Event Broker Options", "event_broker_options=<#>", NO_OPTIONS,
      "bitmask of broker data the daemon sends to loaded modules; -1 for everything"),
    d("broker_module", "Event Broker Module", "broker_module=<module_path> [args]", NO_OPTIONS,
      "event broker module loaded at startup; may be repeated"),
];
