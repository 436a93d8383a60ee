//! Base select statements the composers extend

pub const INSTANCE_SELECT: &str = "select instance.id, instance.service_id, instance.host, \
     instance.port, instance.managed, instance.ctime from instance";

pub const SERVICE_SELECT: &str = "select service.id, service.name, service.namespace, \
     service.business, service.owner, service.ctime from service";

pub const SERVICE_ALIAS_SELECT: &str = "select alias.id, alias.name, alias.namespace, \
     service.name, service.namespace, alias.ctime \
     from service as alias join service on alias.reference = service.id";

pub const NAMESPACE_SELECT: &str = "select name, owner, comment, ctime from namespace";

pub const RATELIMIT_SELECT: &str =
    "select id, service_id, name, namespace, owner, labels, revision, mtime from ratelimit_config";
