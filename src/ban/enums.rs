/// What a rule module wants done with a peer.
pub mod peer_action;
