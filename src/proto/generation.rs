//! Generation protocol messages.
//!
//! These are hand-maintained prost types rather than build-script output so
//! the crate carries no protoc dependency. Field numbers and oneof group
//! memberships are the wire contract: renaming a field is fine, renumbering
//! one is a breaking change.

use super::tensors::Tensor;

// ============================================================================
// TOKENS AND ARTIFACTS
// ============================================================================

/// A single token, optionally paired with its source text.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Token {
    #[prost(string, optional, tag = "1")]
    pub text: Option<String>,
    #[prost(uint32, tag = "2")]
    pub id: u32,
}

/// A token sequence along with the tokenizer that produced it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tokens {
    #[prost(message, repeated, tag = "1")]
    pub tokens: Vec<Token>,
    #[prost(string, optional, tag = "2")]
    pub tokenizer_id: Option<String>,
}

/// One unit of generated (or submitted) content.
///
/// `id` is scoped to the enclosing answer, `uuid` is globally unique.
/// `r#type` declares the semantic kind independently of which `data` arm is
/// populated; the two are expected to agree (see `proto::validation`).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Artifact {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(enumeration = "ArtifactType", tag = "2")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub mime: String,
    #[prost(string, optional, tag = "4")]
    pub magic: Option<String>,
    /// Position of this artifact among the samples of one request.
    #[prost(uint32, tag = "8")]
    pub index: u32,
    #[prost(enumeration = "FinishReason", tag = "9")]
    pub finish_reason: i32,
    #[prost(uint32, tag = "10")]
    pub seed: u32,
    #[prost(string, tag = "12")]
    pub uuid: String,
    /// Byte-length hint for the payload.
    #[prost(uint64, tag = "13")]
    pub size: u64,
    #[prost(oneof = "artifact::Data", tags = "5, 6, 7, 11, 14")]
    pub data: Option<artifact::Data>,
}

pub mod artifact {
    /// Payload of an [`Artifact`](super::Artifact). At most one arm is set.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Data {
        #[prost(bytes, tag = "5")]
        Binary(Vec<u8>),
        #[prost(string, tag = "6")]
        Text(String),
        #[prost(message, tag = "7")]
        Tokens(super::Tokens),
        #[prost(message, tag = "11")]
        Classifier(super::ClassifierParameters),
        #[prost(message, tag = "14")]
        Tensor(super::Tensor),
    }
}

// ============================================================================
// PROMPTS
// ============================================================================

/// Modifiers for one prompt entry.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PromptParameters {
    /// Marks the prompt as an initialization image rather than conditioning.
    #[prost(bool, optional, tag = "1")]
    pub init: Option<bool>,
    /// Prompt weight; absent means 1.0, not 0.
    #[prost(float, optional, tag = "2")]
    pub weight: Option<f32>,
}

/// One conditioning input: text, a token sequence, or a prior artifact.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Prompt {
    #[prost(message, optional, tag = "1")]
    pub parameters: Option<PromptParameters>,
    #[prost(oneof = "prompt::Prompt", tags = "2, 3, 4")]
    pub prompt: Option<prompt::Prompt>,
}

pub mod prompt {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Prompt {
        #[prost(string, tag = "2")]
        Text(String),
        #[prost(message, tag = "3")]
        Tokens(super::Tokens),
        #[prost(message, tag = "4")]
        Artifact(super::Artifact),
    }
}

// ============================================================================
// SAMPLING, SCHEDULING, GUIDANCE
// ============================================================================

/// Low-level sampler knobs. Everything is optional; the backend applies its
/// own defaults for absent fields.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SamplerParameters {
    #[prost(float, optional, tag = "1")]
    pub eta: Option<f32>,
    #[prost(uint64, optional, tag = "2")]
    pub sampling_steps: Option<u64>,
    #[prost(uint64, optional, tag = "3")]
    pub latent_channels: Option<u64>,
    #[prost(uint64, optional, tag = "4")]
    pub downsampling_factor: Option<u64>,
    #[prost(float, optional, tag = "5")]
    pub cfg_scale: Option<f32>,
    #[prost(float, optional, tag = "6")]
    pub init_noise_scale: Option<f32>,
    #[prost(float, optional, tag = "7")]
    pub step_noise_scale: Option<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConditionerParameters {
    #[prost(string, optional, tag = "1")]
    pub vector_adjust_prior: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub conditioner: Option<Model>,
}

/// A sub-range of the diffusion schedule with an override value.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScheduleParameters {
    #[prost(float, optional, tag = "1")]
    pub start: Option<f32>,
    #[prost(float, optional, tag = "2")]
    pub end: Option<f32>,
    #[prost(float, optional, tag = "3")]
    pub value: Option<f32>,
}

/// Per-step parameter overrides, applied progressively over the run.
/// Order within `ImageParameters::parameters` is significant.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StepParameter {
    #[prost(float, tag = "1")]
    pub scaled_step: f32,
    #[prost(message, optional, tag = "2")]
    pub sampler: Option<SamplerParameters>,
    #[prost(message, optional, tag = "3")]
    pub schedule: Option<ScheduleParameters>,
    #[prost(message, optional, tag = "4")]
    pub guidance: Option<GuidanceParameters>,
}

/// Identity of a concrete model build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Model {
    #[prost(enumeration = "ModelArchitecture", tag = "1")]
    pub architecture: i32,
    #[prost(string, tag = "2")]
    pub publisher: String,
    #[prost(string, tag = "3")]
    pub dataset: String,
    #[prost(float, tag = "4")]
    pub version: f32,
    #[prost(string, tag = "5")]
    pub semantic_version: String,
    #[prost(string, tag = "6")]
    pub alias: String,
}

/// Cutout augmentation. Nests itself for multi-scale cutouts; the nesting is
/// a finite owned tree, never a cycle.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CutoutParameters {
    #[prost(message, repeated, tag = "1")]
    pub cutouts: Vec<CutoutParameters>,
    #[prost(uint32, optional, tag = "2")]
    pub count: Option<u32>,
    #[prost(float, optional, tag = "3")]
    pub gray: Option<f32>,
    #[prost(float, optional, tag = "4")]
    pub blur: Option<f32>,
    #[prost(float, optional, tag = "5")]
    pub size_power: Option<f32>,
}

/// One ramp of a piecewise guidance schedule; ramps apply sequentially over
/// the diffusion steps.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GuidanceScheduleParameters {
    #[prost(float, tag = "1")]
    pub duration: f32,
    #[prost(float, tag = "2")]
    pub value: f32,
}

/// One guidance source: models, strength, schedule, optional cutouts and a
/// guiding prompt. Field 1 is reserved upstream.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GuidanceInstanceParameters {
    #[prost(message, repeated, tag = "2")]
    pub models: Vec<Model>,
    #[prost(float, optional, tag = "3")]
    pub guidance_strength: Option<f32>,
    #[prost(message, repeated, tag = "4")]
    pub schedule: Vec<GuidanceScheduleParameters>,
    #[prost(message, optional, tag = "5")]
    pub cutouts: Option<CutoutParameters>,
    #[prost(message, optional, tag = "6")]
    pub prompt: Option<Prompt>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GuidanceParameters {
    #[prost(enumeration = "GuidancePreset", tag = "1")]
    pub guidance_preset: i32,
    #[prost(message, repeated, tag = "2")]
    pub instances: Vec<GuidanceInstanceParameters>,
}

/// Diffusion sampler xor upscaler; the two are mutually exclusive by
/// construction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformType {
    #[prost(oneof = "transform_type::Type", tags = "1, 2")]
    pub r#type: Option<transform_type::Type>,
}

pub mod transform_type {
    #[derive(Clone, Copy, PartialEq, Eq, ::prost::Oneof)]
    pub enum Type {
        #[prost(enumeration = "super::DiffusionSampler", tag = "1")]
        Diffusion(i32),
        #[prost(enumeration = "super::Upscaler", tag = "2")]
        Upscaler(i32),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct T2iAdapterParameter {
    #[prost(enumeration = "T2iAdapter", tag = "1")]
    pub adapter_type: i32,
    #[prost(float, tag = "2")]
    pub adapter_strength: f32,
    #[prost(enumeration = "T2iAdapterInit", tag = "3")]
    pub adapter_init_type: i32,
}

/// Content-credential signing directives.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContentCredentialsParameters {
    #[prost(
        oneof = "content_credentials_parameters::Parameters",
        tags = "1"
    )]
    pub parameters: Option<content_credentials_parameters::Parameters>,
}

pub mod content_credentials_parameters {
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum ModelMetadata {
        Unspecified = 0,
        SignWithEngineId = 1,
    }

    #[derive(Clone, Copy, PartialEq, Eq, ::prost::Oneof)]
    pub enum Parameters {
        #[prost(enumeration = "ModelMetadata", tag = "1")]
        ModelMetadata(i32),
    }
}

/// A fine-tuned model blended into generation at the given weight.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FineTuningParameters {
    #[prost(string, tag = "1")]
    pub model_id: String,
    #[prost(float, optional, tag = "2")]
    pub weight: Option<f32>,
}

/// Generation knobs for image requests.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImageParameters {
    #[prost(uint64, optional, tag = "1")]
    pub height: Option<u64>,
    #[prost(uint64, optional, tag = "2")]
    pub width: Option<u64>,
    #[prost(uint32, repeated, tag = "3")]
    pub seed: Vec<u32>,
    #[prost(uint64, optional, tag = "4")]
    pub samples: Option<u64>,
    #[prost(uint64, optional, tag = "5")]
    pub steps: Option<u64>,
    #[prost(message, optional, tag = "6")]
    pub transform: Option<TransformType>,
    /// Ordered per-step overrides; order is application order.
    #[prost(message, repeated, tag = "7")]
    pub parameters: Vec<StepParameter>,
    #[prost(enumeration = "MaskedAreaInit", optional, tag = "8")]
    pub masked_area_init: Option<i32>,
    #[prost(enumeration = "WeightMethod", optional, tag = "9")]
    pub weight_method: Option<i32>,
    #[prost(bool, optional, tag = "10")]
    pub quantize: Option<bool>,
    #[prost(message, optional, tag = "11")]
    pub adapter: Option<T2iAdapterParameter>,
    #[prost(message, repeated, tag = "12")]
    pub fine_tuning_parameters: Vec<FineTuningParameters>,
    #[prost(message, optional, tag = "13")]
    pub content_credentials_parameters: Option<ContentCredentialsParameters>,
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// One scored concept within a category.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClassifierConcept {
    #[prost(string, tag = "1")]
    pub concept: String,
    #[prost(float, optional, tag = "2")]
    pub threshold: Option<f32>,
}

/// A policy category: concepts, an optional score adjustment, the action to
/// take when exceeded, and the evaluation mode.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClassifierCategory {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub concepts: Vec<ClassifierConcept>,
    #[prost(float, optional, tag = "3")]
    pub adjustment: Option<f32>,
    #[prost(enumeration = "Action", optional, tag = "4")]
    pub action: Option<i32>,
    #[prost(enumeration = "ClassifierMode", optional, tag = "5")]
    pub classifier_mode: Option<i32>,
}

/// The full classification policy plus, after evaluation, its outcome.
///
/// `categories` is supplied by the caller; `exceeds` and `realized_action`
/// are populated by the resolver (`crate::classifier`). Category order in
/// `categories` is not semantically significant, but `exceeds` preserves it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClassifierParameters {
    #[prost(message, repeated, tag = "1")]
    pub categories: Vec<ClassifierCategory>,
    #[prost(message, repeated, tag = "2")]
    pub exceeds: Vec<ClassifierCategory>,
    #[prost(enumeration = "Action", optional, tag = "3")]
    pub realized_action: Option<i32>,
}

// ============================================================================
// INTERPOLATION AND TRANSFORMS
// ============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InterpolateParameters {
    #[prost(float, repeated, tag = "1")]
    pub ratios: Vec<f32>,
    #[prost(enumeration = "InterpolateMode", optional, tag = "2")]
    pub mode: Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformColorAdjust {
    #[prost(float, optional, tag = "1")]
    pub brightness: Option<f32>,
    #[prost(float, optional, tag = "2")]
    pub contrast: Option<f32>,
    #[prost(float, optional, tag = "3")]
    pub hue: Option<f32>,
    #[prost(float, optional, tag = "4")]
    pub saturation: Option<f32>,
    #[prost(float, optional, tag = "5")]
    pub lightness: Option<f32>,
    /// Reference image for color matching.
    #[prost(message, optional, tag = "6")]
    pub match_image: Option<Artifact>,
    #[prost(enumeration = "ColorMatchMode", optional, tag = "7")]
    pub match_mode: Option<i32>,
    #[prost(float, optional, tag = "8")]
    pub noise_amount: Option<f32>,
    #[prost(uint32, optional, tag = "9")]
    pub noise_seed: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformDepthCalc {
    #[prost(float, optional, tag = "1")]
    pub blend_weight: Option<f32>,
    #[prost(uint32, optional, tag = "2")]
    pub blur_radius: Option<u32>,
    #[prost(bool, optional, tag = "3")]
    pub reverse: Option<bool>,
}

/// Row-major matrix payload for resampling and camera transforms.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformMatrix {
    #[prost(float, repeated, tag = "1")]
    pub data: Vec<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformResample {
    #[prost(enumeration = "BorderMode", tag = "1")]
    pub border_mode: i32,
    #[prost(message, optional, tag = "2")]
    pub transform: Option<TransformMatrix>,
    #[prost(message, optional, tag = "3")]
    pub prev_transform: Option<TransformMatrix>,
    #[prost(float, optional, tag = "4")]
    pub depth_warp: Option<f32>,
    #[prost(bool, optional, tag = "5")]
    pub export_mask: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CameraParameters {
    #[prost(enumeration = "CameraType", tag = "1")]
    pub camera_type: i32,
    #[prost(float, tag = "2")]
    pub near_plane: f32,
    #[prost(float, tag = "3")]
    pub far_plane: f32,
    /// Vertical field of view in degrees; perspective cameras only.
    #[prost(float, optional, tag = "4")]
    pub fov: Option<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformCameraPose {
    #[prost(message, optional, tag = "1")]
    pub world_to_view_matrix: Option<TransformMatrix>,
    #[prost(message, optional, tag = "2")]
    pub camera_parameters: Option<CameraParameters>,
    #[prost(bool, tag = "3")]
    pub do_prefill: bool,
    #[prost(enumeration = "RenderMode", tag = "4")]
    pub render_mode: i32,
}

/// Exactly one transform operation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformParameters {
    #[prost(oneof = "transform_parameters::Transform", tags = "2, 4, 5, 6")]
    pub transform: Option<transform_parameters::Transform>,
}

pub mod transform_parameters {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Transform {
        #[prost(message, tag = "2")]
        ColorAdjust(super::TransformColorAdjust),
        #[prost(message, tag = "4")]
        DepthCalc(super::TransformDepthCalc),
        #[prost(message, tag = "5")]
        Resample(super::TransformResample),
        #[prost(message, tag = "6")]
        CameraPose(super::TransformCameraPose),
    }
}

// ============================================================================
// ASSETS
// ============================================================================

/// Asset store operation descriptor.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AssetParameters {
    #[prost(enumeration = "AssetAction", tag = "1")]
    pub action: i32,
    #[prost(string, tag = "2")]
    pub project_id: String,
    #[prost(enumeration = "AssetUse", tag = "3")]
    pub r#use: i32,
}

// ============================================================================
// ANSWERS
// ============================================================================

/// Identity of the compute that produced an answer.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnswerMeta {
    #[prost(string, optional, tag = "1")]
    pub gpu_id: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub cpu_id: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub node_id: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub engine_id: Option<String>,
}

/// The artifacts produced for one request, plus execution metadata.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Answer {
    #[prost(string, tag = "1")]
    pub answer_id: String,
    #[prost(string, tag = "2")]
    pub request_id: String,
    /// Epoch millis when the request was received.
    #[prost(uint64, tag = "3")]
    pub received: u64,
    /// Epoch millis when the answer was created.
    #[prost(uint64, tag = "4")]
    pub created: u64,
    #[prost(message, optional, tag = "6")]
    pub meta: Option<AnswerMeta>,
    #[prost(message, repeated, tag = "7")]
    pub artifacts: Vec<Artifact>,
}

/// Answers grouped under one batch id, e.g. one per chain stage.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnswerBatch {
    #[prost(string, tag = "1")]
    pub batch_id: String,
    #[prost(message, repeated, tag = "2")]
    pub answers: Vec<Answer>,
}

// ============================================================================
// REQUESTS AND CHAINS
// ============================================================================

/// A single generation request.
///
/// Exactly one operation-specific parameter block is carried in `params`;
/// `conditioner` and `extras` are orthogonal modifiers that may accompany
/// any operation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Request {
    #[prost(string, tag = "1")]
    pub engine_id: String,
    #[prost(string, tag = "2")]
    pub request_id: String,
    #[prost(enumeration = "ArtifactType", tag = "3")]
    pub requested_type: i32,
    /// Ordered conditioning inputs.
    #[prost(message, repeated, tag = "4")]
    pub prompt: Vec<Prompt>,
    #[prost(message, optional, tag = "6")]
    pub conditioner: Option<ConditionerParameters>,
    /// Engine-specific passthrough, deliberately schemaless.
    #[prost(message, optional, tag = "2048")]
    pub extras: Option<::prost_types::Struct>,
    #[prost(oneof = "request::Params", tags = "5, 7, 8, 11, 12")]
    pub params: Option<request::Params>,
}

pub mod request {
    /// Operation selector for a [`Request`](super::Request).
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Params {
        #[prost(message, tag = "5")]
        Image(super::ImageParameters),
        #[prost(message, tag = "7")]
        Classifier(super::ClassifierParameters),
        #[prost(message, tag = "8")]
        Asset(super::AssetParameters),
        #[prost(message, tag = "11")]
        Interpolate(super::InterpolateParameters),
        #[prost(message, tag = "12")]
        Transform(super::TransformParameters),
    }
}

/// A branch rule evaluated against one stage's answer.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OnStatus {
    /// Finish reasons this rule matches on.
    #[prost(enumeration = "FinishReason", repeated, tag = "1")]
    pub reason: Vec<i32>,
    /// Stage id to jump to when a `Pass` action fires.
    #[prost(string, optional, tag = "2")]
    pub target: Option<String>,
    /// Actions applied in order when the rule matches.
    #[prost(enumeration = "StageAction", repeated, tag = "3")]
    pub action: Vec<i32>,
    #[prost(message, optional, tag = "4")]
    pub artifact_type: Option<ArtifactTypeFilter>,
}

/// Include/exclude filter over artifact types. A nonempty include list wins
/// over the exclude list.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArtifactTypeFilter {
    #[prost(enumeration = "ArtifactType", repeated, tag = "1")]
    pub include: Vec<i32>,
    #[prost(enumeration = "ArtifactType", repeated, tag = "2")]
    pub exclude: Vec<i32>,
}

/// One request plus its branch rules within a chain.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Stage {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub request: Option<Request>,
    #[prost(message, repeated, tag = "3")]
    pub on_status: Vec<OnStatus>,
}

/// An ordered, possibly cyclic (bounded) sequence of stages. List order is
/// execution order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChainRequest {
    #[prost(string, tag = "1")]
    pub request_id: String,
    #[prost(message, repeated, tag = "2")]
    pub stage: Vec<Stage>,
}

// ============================================================================
// ENUMS
// ============================================================================

/// Outcome of producing an artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FinishReason {
    Null = 0,
    Length = 1,
    Stop = 2,
    Error = 3,
    Filter = 4,
}

/// Semantic kind of an artifact, independent of which payload arm carries it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ArtifactType {
    None = 0,
    Image = 1,
    Video = 2,
    Text = 3,
    Tokens = 4,
    Embedding = 5,
    Classifications = 6,
    Mask = 7,
    Latent = 8,
    Tensor = 9,
    Depth = 10,
    ThreeDModel = 11,
    Audio = 12,
}

/// How masked-out regions are initialized for inpainting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MaskedAreaInit {
    Zero = 0,
    Random = 1,
    Original = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WeightMethod {
    TextEncoder = 0,
    CrossAttention = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DiffusionSampler {
    Ddim = 0,
    Ddpm = 1,
    KEuler = 2,
    KEulerAncestral = 3,
    KHeun = 4,
    KDpm2 = 5,
    KDpm2Ancestral = 6,
    KLms = 7,
    KDpmpp2sAncestral = 8,
    KDpmpp2m = 9,
    KDpmppSde = 10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Upscaler {
    Rgb = 0,
    Gfpgan = 1,
    Esrgan = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum GuidancePreset {
    None = 0,
    Simple = 1,
    FastBlue = 2,
    FastGreen = 3,
    Slow = 4,
    Slower = 5,
    Slowest = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ModelArchitecture {
    None = 0,
    ClipVit = 1,
    ClipResnet = 2,
    Ldm = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum T2iAdapter {
    None = 0,
    Sketch = 1,
    Depth = 2,
    Canny = 3,
}

/// Whether the adapter conditions on the init image or on a dedicated
/// adapter image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum T2iAdapterInit {
    Image = 0,
    AdapterImage = 1,
}

/// Content-policy action attached to a classifier category. Severity for
/// resolution purposes is defined in `crate::classifier`, not by the numeric
/// value here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Action {
    Passthrough = 0,
    RegenerateDuplicate = 1,
    Regenerate = 2,
    ObfuscateDuplicate = 3,
    Obfuscate = 4,
    Discard = 5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ClassifierMode {
    Zeroshot = 0,
    Multiclass = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InterpolateMode {
    Linear = 0,
    Rife = 1,
    VaeLinear = 2,
    VaeSlerp = 3,
    Film = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BorderMode {
    Reflect = 0,
    Replicate = 1,
    Wrap = 2,
    Zero = 3,
    Prefill = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ColorMatchMode {
    Hsv = 0,
    Lab = 1,
    Rgb = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CameraType {
    Perspective = 0,
    Orthographic = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RenderMode {
    Mesh = 0,
    Pointcloud = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AssetAction {
    Put = 0,
    Get = 1,
    Delete = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AssetUse {
    Undefined = 0,
    Input = 1,
    Output = 2,
    Intermediate = 3,
    Project = 4,
}

/// Continuation action applied after a stage's branch rule matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StageAction {
    Pass = 0,
    Discard = 1,
    Return = 2,
}
