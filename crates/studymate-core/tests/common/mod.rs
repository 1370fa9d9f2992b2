use studymate_core::{
    params::ParseResponse,
    response::{collect_stream, split_into_chunks, ResponseCollector},
    tags::ModelTag,
};

/// Payload of a three-day plan, without markers.
pub const THREE_DAYS: &str = "\
name: Introduction to Basic Physics
desc: Explore fundamental concepts of physics.
category: Physics
daily_lessons:
### 1
name: Motion
desc: Speed, velocity and acceleration.
tasks:
- Measure your walking speed
- Plot distance over time
### 2
name: Forces
desc: Newton's laws.
tasks:
- Push a box
### 3
name: Energy
desc: Kinetic and potential energy.
tasks:
- Drop a ball
- Compute its speed";

/// A full model response embedding `payload` between two markdown runs.
pub fn response_with(payload: &str) -> String {
    format!(
        "Sure! Here is a plan for you:\n{}\nGood luck with **physics**!",
        ModelTag::Studyplan.wrap(payload)
    )
}

/// Helper function to stream `response` in chunks of `chunk_size`
/// characters through a fresh pipeline.
pub async fn stream_response(response: &str, chunk_size: usize) -> ResponseCollector {
    let chunks = split_into_chunks(response, &ParseResponse { chunk_size })
        .expect("Failed to split response");
    collect_stream(futures::stream::iter(chunks), ()).await
}
