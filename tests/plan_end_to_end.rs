//! End-to-end planning flow through the public API: build a batch the way
//! a send pipeline would, drain the plan, and hand chains to a runner.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use sendgraph::{
    AttachmentRef, ChainId, ContentSource, JobChain, JobSpec, MessageId, MimeType,
    OutgoingMessage, PlaceholderId, TransformDescription, UploadDependencyGraph,
};
use sendgraph::ports::JobSubmitterPort;

/// Runner stand-in that records every chain handed over.
#[derive(Default)]
struct RecordingRunner {
    chains: Mutex<Vec<JobChain>>,
}

#[async_trait]
impl JobSubmitterPort for RecordingRunner {
    async fn submit(&self, chain: JobChain) -> Result<()> {
        self.chains.lock().unwrap().push(chain);
        Ok(())
    }
}

fn photo(uri: &str) -> AttachmentRef {
    AttachmentRef::new(
        ContentSource::Local {
            uri: uri.to_string(),
        },
        MimeType::image_jpeg(),
        2048,
    )
}

#[tokio::test]
async fn forward_to_three_conversations_uploads_once() {
    // One photo forwarded to three conversations, plus one conversation
    // that also gets a second, trimmed video.
    let shared = photo("file:///tmp/sunset.jpg");
    let trimmed = AttachmentRef::new(
        ContentSource::Local {
            uri: "file:///tmp/clip.mp4".to_string(),
        },
        MimeType::video_mp4(),
        1_000_000,
    )
    .with_transform(TransformDescription::trim(500, 9_500));

    let batch = vec![
        OutgoingMessage::new(MessageId::from("conv-a"), vec![shared.clone()]),
        OutgoingMessage::new(MessageId::from("conv-b"), vec![shared.clone()]),
        OutgoingMessage::new(MessageId::from("conv-c"), vec![shared, trimmed]),
    ];

    // Persistence stand-in: mint one placeholder per occurrence.
    let counter = Mutex::new(0u32);
    let materializer = |_: &OutgoingMessage, _: &AttachmentRef| -> Result<PlaceholderId> {
        let mut n = counter.lock().unwrap();
        *n += 1;
        Ok(PlaceholderId::from(format!("row-{n}")))
    };

    let mut graph = UploadDependencyGraph::build(&batch, &materializer).unwrap();

    // Two identities: the shared photo and the trimmed clip.
    assert_eq!(graph.groups().len(), 2);
    assert_eq!(graph.groups()[0].len(), 3);
    assert_eq!(graph.groups()[1].len(), 1);

    // Every message knows which chains feed it.
    assert_eq!(graph.nodes_for_message(&MessageId::from("conv-a")).len(), 1);
    assert_eq!(graph.nodes_for_message(&MessageId::from("conv-c")).len(), 2);

    let runner = RecordingRunner::default();
    let submitted: Vec<ChainId> = graph.submit_all(&runner).await.unwrap();
    assert_eq!(submitted.len(), 2);

    let chains = runner.chains.into_inner().unwrap();
    assert_eq!(chains.len(), 2);

    // Shared photo: compress + upload + copy to the two other conversations.
    assert_eq!(chains[0].steps.len(), 3);
    assert_eq!(chains[0].destination_count(), 2);
    assert!(matches!(chains[0].steps[2], JobSpec::Copy { .. }));

    // Trimmed clip: nothing to copy.
    assert_eq!(chains[1].steps.len(), 2);
    assert_eq!(chains[1].destination_count(), 0);
}
