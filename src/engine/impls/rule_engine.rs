use std::sync::Arc;
use std::time::Duration;
use futures_util::FutureExt;
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use log::warn;
use tokio::time::Instant;
use crate::ban::structs::ban_result::BanResult;
use crate::engine::structs::rule_engine::RuleEngine;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::traits::feature_module::FeatureModule;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

impl RuleEngine {
    pub fn new(modules: Vec<Arc<dyn FeatureModule>>, check_ban_pool: WorkerPool, rule_execute_pool: Arc<WorkerPool>, timeout: Option<Duration>) -> RuleEngine
    {
        RuleEngine {
            modules,
            check_ban_pool,
            rule_execute_pool,
            timeout,
        }
    }

    pub fn modules(&self) -> &[Arc<dyn FeatureModule>]
    {
        &self.modules
    }

    pub async fn evaluate(&self, torrent: Arc<Torrent>, peer: Arc<Peer>) -> BanResult
    {
        let verdicts = self.collect_verdicts(torrent, peer).await;
        Self::resolve(verdicts)
    }

    /// First `Skip` or `Ban` in the given order, otherwise "No matches".
    pub fn resolve(verdicts: Vec<BanResult>) -> BanResult
    {
        verdicts.into_iter()
            .find(|verdict| verdict.is_decisive())
            .unwrap_or_else(BanResult::no_matches)
    }

    /// Runs every module on the check-ban pool and returns their verdicts in
    /// the order the modules finished.
    pub async fn collect_verdicts(&self, torrent: Arc<Torrent>, peer: Arc<Peer>) -> Vec<BanResult>
    {
        let mut abort_handles = Vec::with_capacity(self.modules.len());
        let mut pending = FuturesUnordered::new();

        for module in &self.modules {
            let module = module.clone();
            let torrent = torrent.clone();
            let peer = peer.clone();
            let rule_execute_pool = self.rule_execute_pool.clone();
            let name = module.name().to_string();

            let handle = self.check_ban_pool.spawn(async move {
                module.should_ban_peer(&torrent, &peer, &rule_execute_pool).await
            });
            abort_handles.push(handle.abort_handle());
            pending.push(handle.map(move |joined| (name, joined)));
        }

        // A timeout too large to add to the clock means no deadline.
        let deadline = self.timeout.and_then(|timeout| Instant::now().checked_add(timeout));
        let mut verdicts = Vec::with_capacity(self.modules.len());
        loop {
            let next = match deadline {
                None => pending.next().await,
                Some(deadline) => match tokio::time::timeout_at(deadline, pending.next()).await {
                    Ok(next) => next,
                    Err(_) => {
                        warn!("[RULE ENGINE] {} module(s) did not answer for peer {} in time, abandoning them", pending.len(), peer.address);
                        for handle in &abort_handles {
                            handle.abort();
                        }
                        break;
                    }
                }
            };
            match next {
                None => break,
                Some((_, Ok(verdict))) => verdicts.push(verdict),
                Some((name, Err(error))) => {
                    warn!("[RULE ENGINE] Module {} failed while checking peer {}: {}", name, peer.address, error);
                }
            }
        }
        verdicts
    }
}
