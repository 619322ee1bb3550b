//! Embed Replacer (Use Case)
//!
//! Swaps a YouTube link preview for one carrying DeArrow's crowd-sourced
//! title and thumbnail.
//!
//! Per event: gate → fetch branding → synthesize → post reply → suppress
//! the original preview. Every step runs at most once; failures are logged
//! and end the event without retry or rollback.

use std::sync::Arc;

use crate::domain::entities::{IncomingMessage, ReplacementEmbed, YOUTUBE_PROVIDER};
use crate::domain::value_objects::{DearrowEndpoints, EmbedScan};
use crate::ports::{BrandingService, ChatPlatform};

/// Tunables for the replacement policy
#[derive(Debug, Clone, Default)]
pub struct ReplacerConfig {
    /// How the source embed is located
    pub embed_scan: EmbedScan,
    /// Still suppress the original preview when posting the reply failed
    pub suppress_on_failed_reply: bool,
}

/// Why an event produced no outbound action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The message was written by the bot
    OwnMessage,
    /// "Send messages" is not granted, or membership could not be resolved
    MissingPermission,
    /// The message has no embeds
    NoEmbeds,
    /// The embed scan found no YouTube preview
    NoEligibleEmbed,
}

/// What handling one event amounted to
#[derive(Debug, Clone, PartialEq)]
pub enum ReplacementOutcome {
    /// Gate failed, nothing was done
    Skipped(SkipReason),
    /// Branding lookup failed, nothing was posted
    BrandingUnavailable,
    /// Outbound actions were attempted
    Completed {
        reply_posted: bool,
        embeds_suppressed: bool,
    },
}

impl ReplacementOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Application service replacing YouTube previews
pub struct EmbedReplacer {
    branding: Arc<dyn BrandingService>,
    endpoints: DearrowEndpoints,
    config: ReplacerConfig,
}

impl EmbedReplacer {
    pub fn new(branding: Arc<dyn BrandingService>, endpoints: DearrowEndpoints) -> Self {
        Self::with_config(branding, endpoints, ReplacerConfig::default())
    }

    pub fn with_config(
        branding: Arc<dyn BrandingService>,
        endpoints: DearrowEndpoints,
        config: ReplacerConfig,
    ) -> Self {
        Self {
            branding,
            endpoints,
            config,
        }
    }

    /// Handle a created or edited message
    pub async fn handle(
        &self,
        platform: &dyn ChatPlatform,
        message: &IncomingMessage,
    ) -> ReplacementOutcome {
        let outcome = self.run(platform, message).await;
        tracing::debug!(
            guild_id = %message.guild_id,
            channel_id = %message.channel_id,
            message_id = %message.message_id,
            outcome = ?outcome,
            "Handled message"
        );
        outcome
    }

    async fn run(&self, platform: &dyn ChatPlatform, message: &IncomingMessage) -> ReplacementOutcome {
        if message.is_authored_by(platform.self_user_id()) {
            return ReplacementOutcome::Skipped(SkipReason::OwnMessage);
        }

        if !platform.can_send_messages(message.guild_id, message.channel_id) {
            return ReplacementOutcome::Skipped(SkipReason::MissingPermission);
        }

        if message.embeds.is_empty() {
            return ReplacementOutcome::Skipped(SkipReason::NoEmbeds);
        }

        let Some(source) = self
            .config
            .embed_scan
            .select(&message.embeds, YOUTUBE_PROVIDER)
        else {
            return ReplacementOutcome::Skipped(SkipReason::NoEligibleEmbed);
        };

        let video_id = source.video_id();

        let record = match self.branding.fetch_branding(&video_id).await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(
                    video_id = %video_id,
                    url = %self.endpoints.branding_request_url(&video_id),
                    error = %e,
                    "Failed to fetch branding"
                );
                return ReplacementOutcome::BrandingUnavailable;
            }
        };

        let embed = ReplacementEmbed::synthesize(source, &video_id, &record, &self.endpoints);

        let reply_posted = match platform
            .post_reply(message.channel_id, message.message_id, &embed)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    channel_id = %message.channel_id,
                    message_id = %message.message_id,
                    error = %e,
                    "Failed to post replacement embed"
                );
                false
            }
        };

        if !reply_posted && !self.config.suppress_on_failed_reply {
            return ReplacementOutcome::Completed {
                reply_posted,
                embeds_suppressed: false,
            };
        }

        let embeds_suppressed = match platform
            .suppress_embeds(message.channel_id, message.message_id)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    channel_id = %message.channel_id,
                    message_id = %message.message_id,
                    error = %e,
                    "Failed to suppress original embeds"
                );
                false
            }
        };

        ReplacementOutcome::Completed {
            reply_posted,
            embeds_suppressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BrandingRecord, BrandingTitle, EmbedAuthor, SourceEmbed};
    use crate::domain::errors::DomainError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const BOT_ID: u64 = 999;
    const GUILD: u64 = 1;
    const CHANNEL: u64 = 2;
    const MESSAGE: u64 = 3;

    /// Collects formatted log output written by the test subscriber
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn error_count(&self) -> usize {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .filter(|line| line.contains("ERROR"))
                .count()
        }
    }

    /// Route ERROR events on this thread into a buffer until the guard drops
    fn capture_errors() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::ERROR)
            .with_writer(move || writer.clone())
            .finish();

        (buffer, tracing::subscriber::set_default(subscriber))
    }

    #[derive(Default)]
    struct FakePlatform {
        denied: bool,
        fail_reply: bool,
        fail_suppress: bool,
        replies: Mutex<Vec<(u64, u64, ReplacementEmbed)>>,
        suppressed: Mutex<Vec<(u64, u64)>>,
    }

    impl FakePlatform {
        fn reply_count(&self) -> usize {
            self.replies.lock().unwrap().len()
        }

        fn suppress_count(&self) -> usize {
            self.suppressed.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatPlatform for FakePlatform {
        fn self_user_id(&self) -> u64 {
            BOT_ID
        }

        fn can_send_messages(&self, _guild_id: u64, _channel_id: u64) -> bool {
            !self.denied
        }

        async fn post_reply(
            &self,
            channel_id: u64,
            message_id: u64,
            embed: &ReplacementEmbed,
        ) -> Result<(), DomainError> {
            if self.fail_reply {
                return Err(DomainError::Platform("Missing Access".into()));
            }
            self.replies
                .lock()
                .unwrap()
                .push((channel_id, message_id, embed.clone()));
            Ok(())
        }

        async fn suppress_embeds(&self, channel_id: u64, message_id: u64) -> Result<(), DomainError> {
            if self.fail_suppress {
                return Err(DomainError::Platform("Missing Permissions".into()));
            }
            self.suppressed.lock().unwrap().push((channel_id, message_id));
            Ok(())
        }
    }

    struct FakeBranding {
        response: Result<BrandingRecord, String>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeBranding {
        fn ok(record: BrandingRecord) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(record),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                response: Err("connection refused".into()),
                requested: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl BrandingService for FakeBranding {
        async fn fetch_branding(&self, video_id: &str) -> Result<BrandingRecord, DomainError> {
            self.requested.lock().unwrap().push(video_id.to_string());
            self.response
                .clone()
                .map_err(DomainError::ExternalService)
        }
    }

    fn youtube_embed() -> SourceEmbed {
        SourceEmbed {
            provider_name: Some("YouTube".into()),
            url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".into()),
            title: Some("Original".into()),
            thumbnail_url: Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".into()),
            color: Some(0xFF0000),
            author: Some(EmbedAuthor {
                name: "Channel".into(),
                url: None,
                icon_url: None,
            }),
        }
    }

    fn other_embed() -> SourceEmbed {
        SourceEmbed {
            provider_name: Some("Twitch".into()),
            url: Some("https://www.twitch.tv/somebody".into()),
            ..Default::default()
        }
    }

    fn message(embeds: Vec<SourceEmbed>) -> IncomingMessage {
        IncomingMessage::new(GUILD, CHANNEL, MESSAGE)
            .with_author(12345)
            .with_embeds(embeds)
    }

    fn better_title() -> BrandingRecord {
        BrandingRecord {
            titles: vec![BrandingTitle {
                title: "Better Title".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn replacer(branding: Arc<FakeBranding>) -> EmbedReplacer {
        EmbedReplacer::new(branding, DearrowEndpoints::default())
    }

    #[tokio::test]
    async fn test_replaces_youtube_embed() {
        let (logs, _guard) = capture_errors();
        let branding = FakeBranding::ok(better_title());
        let platform = FakePlatform::default();

        let outcome = replacer(branding.clone())
            .handle(&platform, &message(vec![youtube_embed()]))
            .await;

        assert_eq!(
            outcome,
            ReplacementOutcome::Completed {
                reply_posted: true,
                embeds_suppressed: true
            }
        );
        assert_eq!(*branding.requested.lock().unwrap(), vec!["dQw4w9WgXcQ"]);

        let replies = platform.replies.lock().unwrap();
        assert_eq!(replies.len(), 1);
        let (channel_id, message_id, embed) = &replies[0];
        assert_eq!((*channel_id, *message_id), (CHANNEL, MESSAGE));
        assert_eq!(embed.title.as_deref(), Some("Better Title"));
        assert_eq!(embed.footer.as_deref(), Some("Original title: Original"));
        assert_eq!(
            embed.image_url.as_deref(),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
        assert_eq!(*platform.suppressed.lock().unwrap(), vec![(CHANNEL, MESSAGE)]);
        assert_eq!(logs.error_count(), 0);
    }

    #[tokio::test]
    async fn test_no_embeds_no_action() {
        let branding = FakeBranding::ok(better_title());
        let platform = FakePlatform::default();

        let outcome = replacer(branding.clone())
            .handle(&platform, &message(vec![]))
            .await;

        assert_eq!(outcome, ReplacementOutcome::Skipped(SkipReason::NoEmbeds));
        assert!(branding.requested.lock().unwrap().is_empty());
        assert_eq!(platform.reply_count(), 0);
        assert_eq!(platform.suppress_count(), 0);
    }

    #[tokio::test]
    async fn test_permission_denied_no_action() {
        let branding = FakeBranding::ok(better_title());
        let platform = FakePlatform {
            denied: true,
            ..Default::default()
        };

        let outcome = replacer(branding.clone())
            .handle(&platform, &message(vec![youtube_embed()]))
            .await;

        assert_eq!(
            outcome,
            ReplacementOutcome::Skipped(SkipReason::MissingPermission)
        );
        assert!(branding.requested.lock().unwrap().is_empty());
        assert_eq!(platform.reply_count(), 0);
        assert_eq!(platform.suppress_count(), 0);
    }

    #[tokio::test]
    async fn test_other_provider_no_action() {
        let branding = FakeBranding::ok(better_title());
        let platform = FakePlatform::default();

        let outcome = replacer(branding.clone())
            .handle(&platform, &message(vec![other_embed()]))
            .await;

        assert_eq!(
            outcome,
            ReplacementOutcome::Skipped(SkipReason::NoEligibleEmbed)
        );
        assert_eq!(platform.reply_count(), 0);
    }

    #[tokio::test]
    async fn test_first_only_scan_abandons_message() {
        let branding = FakeBranding::ok(better_title());
        let platform = FakePlatform::default();

        let outcome = replacer(branding.clone())
            .handle(&platform, &message(vec![other_embed(), youtube_embed()]))
            .await;

        assert!(outcome.is_skipped());
        assert!(branding.requested.lock().unwrap().is_empty());
        assert_eq!(platform.reply_count(), 0);
    }

    #[tokio::test]
    async fn test_first_matching_scan_finds_later_embed() {
        let branding = FakeBranding::ok(better_title());
        let platform = FakePlatform::default();
        let replacer = EmbedReplacer::with_config(
            branding.clone(),
            DearrowEndpoints::default(),
            ReplacerConfig {
                embed_scan: EmbedScan::FirstMatching,
                ..Default::default()
            },
        );

        let outcome = replacer
            .handle(&platform, &message(vec![other_embed(), youtube_embed()]))
            .await;

        assert!(!outcome.is_skipped());
        assert_eq!(platform.reply_count(), 1);
    }

    #[tokio::test]
    async fn test_own_message_ignored() {
        let branding = FakeBranding::ok(better_title());
        let platform = FakePlatform::default();
        let own = IncomingMessage::new(GUILD, CHANNEL, MESSAGE)
            .with_author(BOT_ID)
            .with_embeds(vec![youtube_embed()]);

        let outcome = replacer(branding).handle(&platform, &own).await;

        assert_eq!(outcome, ReplacementOutcome::Skipped(SkipReason::OwnMessage));
        assert_eq!(platform.reply_count(), 0);
    }

    #[tokio::test]
    async fn test_branding_failure_no_action() {
        let (logs, _guard) = capture_errors();
        let platform = FakePlatform::default();

        let outcome = replacer(FakeBranding::failing())
            .handle(&platform, &message(vec![youtube_embed()]))
            .await;

        assert_eq!(outcome, ReplacementOutcome::BrandingUnavailable);
        assert_eq!(platform.reply_count(), 0);
        assert_eq!(platform.suppress_count(), 0);
        assert_eq!(logs.error_count(), 1);
    }

    #[tokio::test]
    async fn test_suppress_failure_keeps_reply() {
        let (logs, _guard) = capture_errors();
        let platform = FakePlatform {
            fail_suppress: true,
            ..Default::default()
        };

        let outcome = replacer(FakeBranding::ok(better_title()))
            .handle(&platform, &message(vec![youtube_embed()]))
            .await;

        assert_eq!(
            outcome,
            ReplacementOutcome::Completed {
                reply_posted: true,
                embeds_suppressed: false
            }
        );
        assert_eq!(platform.reply_count(), 1);
        assert_eq!(platform.suppress_count(), 0);
        assert_eq!(logs.error_count(), 1);
    }

    #[tokio::test]
    async fn test_reply_failure_skips_suppress_by_default() {
        let (logs, _guard) = capture_errors();
        let platform = FakePlatform {
            fail_reply: true,
            ..Default::default()
        };

        let outcome = replacer(FakeBranding::ok(better_title()))
            .handle(&platform, &message(vec![youtube_embed()]))
            .await;

        assert_eq!(
            outcome,
            ReplacementOutcome::Completed {
                reply_posted: false,
                embeds_suppressed: false
            }
        );
        assert_eq!(platform.suppress_count(), 0);
        assert_eq!(logs.error_count(), 1);
    }

    #[tokio::test]
    async fn test_reply_failure_can_still_suppress() {
        let (logs, _guard) = capture_errors();
        let platform = FakePlatform {
            fail_reply: true,
            ..Default::default()
        };
        let replacer = EmbedReplacer::with_config(
            FakeBranding::ok(better_title()),
            DearrowEndpoints::default(),
            ReplacerConfig {
                suppress_on_failed_reply: true,
                ..Default::default()
            },
        );

        let outcome = replacer
            .handle(&platform, &message(vec![youtube_embed()]))
            .await;

        assert_eq!(
            outcome,
            ReplacementOutcome::Completed {
                reply_posted: false,
                embeds_suppressed: true
            }
        );
        assert_eq!(platform.suppress_count(), 1);
        assert_eq!(logs.error_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_video_id_passed_through() {
        let branding = FakeBranding::ok(BrandingRecord::default());
        let platform = FakePlatform::default();
        let embed = SourceEmbed {
            url: Some("https://www.youtube.com/shorts/abc".into()),
            ..youtube_embed()
        };

        replacer(branding.clone())
            .handle(&platform, &message(vec![embed]))
            .await;

        assert_eq!(*branding.requested.lock().unwrap(), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_each_failed_step_logs_once() {
        let (logs, _guard) = capture_errors();
        let platform = FakePlatform {
            fail_reply: true,
            fail_suppress: true,
            ..Default::default()
        };
        let replacer = EmbedReplacer::with_config(
            FakeBranding::ok(better_title()),
            DearrowEndpoints::default(),
            ReplacerConfig {
                suppress_on_failed_reply: true,
                ..Default::default()
            },
        );

        replacer
            .handle(&platform, &message(vec![youtube_embed()]))
            .await;

        assert_eq!(logs.error_count(), 2);
    }
}
