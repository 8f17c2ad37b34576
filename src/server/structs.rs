/// Ban wave server holding downloaders, registry and rule engine.
pub mod peer_ban_server;
