//! Wire round-trips across the message surface, including every `params`
//! arm of `Request` and every transform arm.

use genchain::codec::{decode, encode};
use genchain::proto::validation::validate_request;
use genchain::proto::*;

fn roundtrip<M>(message: M)
where
    M: prost::Message + Default + PartialEq + std::fmt::Debug,
{
    let decoded = decode::<M>(&encode(&message)).unwrap();
    assert_eq!(decoded, message);
}

fn full_image_params() -> ImageParameters {
    ImageParameters {
        height: Some(1024),
        width: Some(1024),
        seed: vec![7, 8, 9],
        samples: Some(4),
        steps: Some(50),
        transform: Some(TransformType {
            r#type: Some(transform_type::Type::Upscaler(Upscaler::Esrgan as i32)),
        }),
        parameters: vec![StepParameter {
            scaled_step: 0.5,
            sampler: Some(SamplerParameters {
                eta: Some(0.0),
                cfg_scale: Some(7.0),
                ..Default::default()
            }),
            schedule: Some(ScheduleParameters {
                start: Some(1.0),
                end: Some(0.0),
                value: None,
            }),
            guidance: Some(GuidanceParameters {
                guidance_preset: GuidancePreset::FastGreen as i32,
                instances: vec![GuidanceInstanceParameters {
                    models: vec![Model {
                        architecture: ModelArchitecture::ClipVit as i32,
                        publisher: "openai".into(),
                        dataset: "laion".into(),
                        version: 1.0,
                        semantic_version: "1.0.0".into(),
                        alias: "clip".into(),
                    }],
                    guidance_strength: Some(0.25),
                    schedule: vec![
                        GuidanceScheduleParameters {
                            duration: 0.5,
                            value: 1.0,
                        },
                        GuidanceScheduleParameters {
                            duration: 0.5,
                            value: 0.5,
                        },
                    ],
                    cutouts: Some(CutoutParameters {
                        cutouts: vec![CutoutParameters {
                            count: Some(8),
                            ..Default::default()
                        }],
                        count: Some(32),
                        gray: Some(0.2),
                        blur: None,
                        size_power: Some(0.5),
                    }),
                    prompt: Some(Prompt::from_text("guide me")),
                }],
            }),
        }],
        masked_area_init: Some(MaskedAreaInit::Original as i32),
        weight_method: Some(WeightMethod::CrossAttention as i32),
        quantize: Some(false),
        adapter: Some(T2iAdapterParameter {
            adapter_type: T2iAdapter::Depth as i32,
            adapter_strength: 0.8,
            adapter_init_type: T2iAdapterInit::AdapterImage as i32,
        }),
        fine_tuning_parameters: vec![FineTuningParameters {
            model_id: "ft-123".into(),
            weight: Some(0.6),
        }],
        content_credentials_parameters: Some(ContentCredentialsParameters {
            parameters: Some(content_credentials_parameters::Parameters::ModelMetadata(
                content_credentials_parameters::ModelMetadata::SignWithEngineId as i32,
            )),
        }),
    }
}

#[test]
fn image_request_round_trips() {
    let request = Request {
        engine_id: "sd-xl".into(),
        request_id: "r1".into(),
        requested_type: ArtifactType::Image as i32,
        prompt: vec![
            Prompt::from_text("sunrise over water").with_parameters(PromptParameters {
                init: None,
                weight: Some(1.2),
            }),
        ],
        conditioner: Some(ConditionerParameters {
            vector_adjust_prior: Some("v-prior".into()),
            conditioner: None,
        }),
        extras: None,
        params: Some(request::Params::Image(full_image_params())),
    };
    assert!(validate_request(&request).is_ok());
    roundtrip(request);
}

#[test]
fn classifier_request_round_trips() {
    roundtrip(Request {
        requested_type: ArtifactType::Classifications as i32,
        params: Some(request::Params::Classifier(ClassifierParameters {
            categories: vec![ClassifierCategory {
                name: "unsafe".into(),
                concepts: vec![ClassifierConcept {
                    concept: "gore".into(),
                    threshold: Some(0.4),
                }],
                adjustment: Some(-0.05),
                action: Some(Action::Obfuscate as i32),
                classifier_mode: Some(ClassifierMode::Multiclass as i32),
            }],
            exceeds: vec![],
            realized_action: None,
        })),
        ..Default::default()
    });
}

#[test]
fn asset_request_round_trips() {
    roundtrip(Request {
        params: Some(request::Params::Asset(AssetParameters {
            action: AssetAction::Get as i32,
            project_id: "proj-9".into(),
            r#use: AssetUse::Intermediate as i32,
        })),
        ..Default::default()
    });
}

#[test]
fn interpolate_request_round_trips() {
    roundtrip(Request {
        params: Some(request::Params::Interpolate(InterpolateParameters {
            ratios: vec![0.25, 0.5, 0.75],
            mode: Some(InterpolateMode::Film as i32),
        })),
        ..Default::default()
    });
}

#[test]
fn every_transform_arm_round_trips() {
    let arms = vec![
        transform_parameters::Transform::ColorAdjust(TransformColorAdjust {
            brightness: Some(1.1),
            contrast: Some(0.9),
            hue: None,
            saturation: Some(1.0),
            lightness: None,
            match_image: Some(Artifact {
                r#type: ArtifactType::Image as i32,
                data: Some(artifact::Data::Binary(vec![1, 2])),
                ..Default::default()
            }),
            match_mode: Some(ColorMatchMode::Lab as i32),
            noise_amount: Some(0.02),
            noise_seed: Some(99),
        }),
        transform_parameters::Transform::DepthCalc(TransformDepthCalc {
            blend_weight: Some(0.5),
            blur_radius: Some(3),
            reverse: Some(true),
        }),
        transform_parameters::Transform::Resample(TransformResample {
            border_mode: BorderMode::Wrap as i32,
            transform: Some(TransformMatrix {
                data: vec![1.0, 0.0, 0.0, 1.0],
            }),
            prev_transform: None,
            depth_warp: Some(0.1),
            export_mask: Some(false),
        }),
        transform_parameters::Transform::CameraPose(TransformCameraPose {
            world_to_view_matrix: Some(TransformMatrix {
                data: vec![0.0; 16],
            }),
            camera_parameters: Some(CameraParameters {
                camera_type: CameraType::Perspective as i32,
                near_plane: 0.1,
                far_plane: 100.0,
                fov: Some(60.0),
            }),
            do_prefill: true,
            render_mode: RenderMode::Pointcloud as i32,
        }),
    ];
    for arm in arms {
        roundtrip(Request {
            params: Some(request::Params::Transform(TransformParameters {
                transform: Some(arm),
            })),
            ..Default::default()
        });
    }
}

#[test]
fn every_artifact_arm_round_trips() {
    let arms: Vec<(ArtifactType, artifact::Data)> = vec![
        (ArtifactType::Image, artifact::Data::Binary(vec![0xff; 16])),
        (ArtifactType::Text, artifact::Data::Text("caption".into())),
        (
            ArtifactType::Tokens,
            artifact::Data::Tokens(Tokens {
                tokens: vec![
                    Token {
                        text: Some("he".into()),
                        id: 1,
                    },
                    Token {
                        text: None,
                        id: 2,
                    },
                ],
                tokenizer_id: Some("bpe".into()),
            }),
        ),
        (
            ArtifactType::Classifications,
            artifact::Data::Classifier(ClassifierParameters::default()),
        ),
        (
            ArtifactType::Tensor,
            artifact::Data::Tensor(Tensor {
                dtype: Dtype::Float32 as i32,
                shape: vec![2, 3],
                data: vec![0u8; 24],
            }),
        ),
    ];
    for (ty, data) in arms {
        roundtrip(Artifact {
            id: 3,
            r#type: ty as i32,
            mime: "x".into(),
            magic: Some("MAGIC".into()),
            index: 1,
            finish_reason: FinishReason::Stop as i32,
            seed: 1234,
            uuid: "u-1".into(),
            size: 24,
            data: Some(data),
        });
    }
}

#[test]
fn extras_struct_passes_through() {
    let mut fields = std::collections::BTreeMap::new();
    fields.insert(
        "engine_hint".to_string(),
        prost_types::Value {
            kind: Some(prost_types::value::Kind::StringValue("fast".into())),
        },
    );
    roundtrip(Request {
        extras: Some(prost_types::Struct { fields }),
        ..Default::default()
    });
}

#[test]
fn answer_batch_round_trips() {
    roundtrip(AnswerBatch {
        batch_id: "batch-1".into(),
        answers: vec![Answer {
            answer_id: "a1".into(),
            request_id: "r1".into(),
            received: 1_700_000_000_000,
            created: 1_700_000_000_250,
            meta: Some(AnswerMeta {
                gpu_id: Some("gpu-0".into()),
                cpu_id: None,
                node_id: Some("node-3".into()),
                engine_id: Some("sd-xl".into()),
            }),
            artifacts: vec![Artifact {
                r#type: ArtifactType::Image as i32,
                data: Some(artifact::Data::Binary(vec![9, 9, 9])),
                finish_reason: FinishReason::Stop as i32,
                ..Default::default()
            }],
        }],
    });
}

#[test]
fn chain_request_round_trips() {
    roundtrip(ChainRequest {
        request_id: "c1".into(),
        stage: vec![Stage {
            id: "s1".into(),
            request: Some(Request::default()),
            on_status: vec![OnStatus {
                reason: vec![FinishReason::Stop as i32, FinishReason::Filter as i32],
                target: Some("s1".into()),
                action: vec![StageAction::Discard as i32, StageAction::Pass as i32],
                artifact_type: Some(ArtifactTypeFilter {
                    include: vec![],
                    exclude: vec![ArtifactType::Text as i32],
                }),
            }],
        }],
    });
}
