use spriter_animation_core::{
    data::{ObjectType, Spatial},
    sample, Config, DataError, Ref, Sampler, SpriterData,
};
use spriter_test_fixtures::datasets;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn hero() -> SpriterData {
    datasets::load("hero").expect("load hero fixture")
}

#[test]
fn every_fixture_parses_and_validates() {
    for key in datasets::keys() {
        let data: SpriterData = datasets::load(&key).expect("fixture should parse");
        data.validate()
            .unwrap_or_else(|e| panic!("fixture '{key}' failed validation: {e}"));
    }
}

#[test]
fn dataset_round_trips_through_json() {
    let data = hero();
    let text = serde_json::to_string(&data).expect("serialize");
    let back: SpriterData = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, data);
}

#[test]
fn lookups_by_name_and_index_agree() {
    let data = hero();
    let by_name = data.animation_by_name("hero", "run").expect("run");
    let by_index = data.animation(0, 1).expect("animation 0/1");
    assert!(std::ptr::eq(by_name, by_index));
    assert!(data.animation_by_name("hero", "fly").is_none());
    assert!(data.animation(5, 0).is_none());
    assert_eq!(data.entity(1).map(|e| e.name.as_str()), Some("lantern"));
}

#[test]
fn walk_matches_authored_values_at_mainline_keys() {
    let data = hero();
    let walk = data.animation_by_name("hero", "walk").expect("walk");

    let pose = sample(&data, walk, 500.0);
    // hip at (0,110) rotated 10 degrees; torso local (5,12)
    let (s, c) = 10f32.to_radians().sin_cos();
    let torso = &pose.sprites[0];
    approx(torso.spatial.x, 5.0 * c - 12.0 * s, 1e-3);
    approx(torso.spatial.y, 5.0 * s + 12.0 * c + 110.0, 1e-3);
    approx(torso.spatial.angle, 10.0, 1e-4);
    assert_eq!(torso.pivot_x, 0.5);
    assert_eq!(torso.alpha, 1.0);

    let pose = sample(&data, walk, 0.0);
    approx(pose.sprites[0].spatial.x, 5.0, 1e-4);
    approx(pose.sprites[0].spatial.y, 110.0, 1e-4);
}

#[test]
fn walk_interpolates_between_keys() {
    let data = hero();
    let walk = data.animation_by_name("hero", "walk").expect("walk");
    let pose = sample(&data, walk, 250.0);

    // hip (0,105) at 5deg; thigh local (20,0) at 285deg; foot local (42,0)
    let hip = Spatial {
        y: 105.0,
        angle: 5.0,
        ..Spatial::default()
    };
    let thigh = Spatial {
        x: 20.0,
        angle: 285.0,
        ..Spatial::default()
    }
    .in_parent(&hip);
    approx(thigh.angle, 290.0, 1e-3);

    let foot = Spatial {
        x: 42.0,
        ..Spatial::default()
    }
    .in_parent(&thigh);
    let point = &pose.points[0].spatial;
    approx(point.x, foot.x, 1e-3);
    approx(point.y, foot.y, 1e-3);
    approx(point.angle, 290.0, 1e-3);
}

#[test]
fn walk_wraps_back_to_start_with_clockwise_spin() {
    let data = hero();
    let walk = data.animation_by_name("hero", "walk").expect("walk");
    // second half: hip angle 10 -> 0 clockwise, y 110 -> 100
    let pose = sample(&data, walk, 750.0);
    let torso = &pose.sprites[0].spatial;
    approx(torso.angle, 5.0, 1e-3);
    assert_eq!(sample(&data, walk, 750.0), sample(&data, walk, 1750.0));
}

#[test]
fn hitbox_is_keyed_by_object_id() {
    let data = hero();
    let walk = data.animation_by_name("hero", "walk").expect("walk");
    let pose = sample(&data, walk, 100.0);
    assert_eq!(pose.boxes.len(), 1);
    let hitbox = pose.box_for(7).expect("box 7");
    approx(hitbox.spatial.scale_x, 2.0, 1e-6);
    approx(hitbox.spatial.scale_y, 3.0, 1e-6);
}

#[test]
fn carry_splices_nested_lantern_sprites() {
    let data = hero();
    let carry = data.animation_by_name("hero", "carry").expect("carry");

    // arm at (10,50) facing up; lantern object 30 along the arm -> (10,80)
    let arm = Spatial {
        x: 10.0,
        y: 50.0,
        angle: 90.0,
        ..Spatial::default()
    };
    let lantern = Spatial {
        x: 30.0,
        ..Spatial::default()
    }
    .in_parent(&arm);

    let pose = sample(&data, carry, 0.0);
    assert_eq!(pose.sprites.len(), 2, "flame then hand");
    let flame = &pose.sprites[0].spatial;
    approx(flame.x, 10.0, 1e-3);
    approx(flame.y, 85.0, 1e-3);
    approx(flame.angle, 90.0, 1e-3);
    let hand = &pose.sprites[1].spatial;
    approx(hand.x, 10.0, 1e-3);
    approx(hand.y, 75.0, 1e-3);
    // the nested spark point is dropped
    assert!(pose.points.is_empty());

    // halfway: nested progression 0.5 -> flicker at 50
    let pose = sample(&data, carry, 200.0);
    let flicker = data.animation_by_name("lantern", "flicker").expect("flicker");
    let nested = sample(&data, flicker, 50.0).sprites[0].spatial.in_parent(&lantern);
    let flame = &pose.sprites[0].spatial;
    approx(flame.x, nested.x, 1e-3);
    approx(flame.y, nested.y, 1e-3);
    approx(flame.x, 6.0, 1e-3);
    approx(flame.y, 85.0, 1e-3);
}

#[test]
fn non_looping_carry_clamps_past_the_end() {
    let data = hero();
    let carry = data.animation_by_name("hero", "carry").expect("carry");
    assert_eq!(sample(&data, carry, 400.0), sample(&data, carry, 1000.0));
}

#[test]
fn sampler_without_entity_expansion() {
    let data = hero();
    let carry = data.animation_by_name("hero", "carry").expect("carry");
    let sampler = Sampler::new(Config {
        expand_entities: false,
        ..Config::default()
    });
    let pose = sampler.sample(&data, carry, 0.0);
    assert_eq!(pose.sprites.len(), 1);
    assert!(!sampler.config().expand_entities);
}

#[test]
fn validate_reports_parent_after_child() {
    let mut data = hero();
    let key = &mut data.entities[0].animations[0].mainline[0];
    key.bone_refs.swap(0, 1);
    key.bone_refs[0].parent = Some(1);
    key.bone_refs[1].parent = None;
    assert!(matches!(
        data.validate(),
        Err(DataError::ParentOutOfOrder {
            animation: 0,
            key: 0,
            index: 0,
            parent: 1
        })
    ));
}

#[test]
fn validate_reports_dangling_references() {
    let mut data = hero();
    data.entities[0].animations[1].mainline[1].object_refs.push(Ref {
        id: 3,
        parent: None,
        timeline: 42,
        key: 0,
    });
    let err = data.validate().unwrap_err();
    assert_eq!(
        err,
        DataError::MissingTimeline {
            animation: 1,
            key: 1,
            timeline: 42
        }
    );
    assert!(err.to_string().contains("missing timeline 42"));

    let mut data = hero();
    data.entities[0].animations[0].mainline[0].bone_refs[0].key = 9;
    assert!(matches!(
        data.validate(),
        Err(DataError::MissingTimelineKey { key: 9, .. })
    ));
}

#[test]
fn validate_reports_broken_timelines() {
    let mut data = hero();
    data.entities[0].animations[2].timelines[0].keys.clear();
    assert_eq!(
        data.validate(),
        Err(DataError::EmptyTimeline {
            animation: 2,
            timeline: 0
        })
    );

    let mut data = hero();
    data.entities[0].animations[0].timelines[2].keys[1].time = -5.0;
    assert_eq!(
        data.validate(),
        Err(DataError::UnsortedTimelineKeys {
            animation: 0,
            timeline: 2,
            key: 1
        })
    );
}

#[test]
fn validate_accepts_one_wrap_in_looping_timelines() {
    let mut data = hero();
    let torso = &mut data.entities[0].animations[0].timelines[2];
    let mut wrapped = torso.keys[0].clone();
    wrapped.id = 2;
    wrapped.time = 100.0;
    torso.keys.push(wrapped.clone());
    data.validate().expect("a single wrap is allowed while looping");

    wrapped.id = 3;
    wrapped.time = 50.0;
    data.entities[0].animations[0].timelines[2].keys.push(wrapped);
    assert_eq!(
        data.validate(),
        Err(DataError::UnsortedTimelineKeys {
            animation: 0,
            timeline: 2,
            key: 3
        })
    );

    // carry does not loop, so any step back is rejected
    let mut data = hero();
    let arm = &mut data.entities[0].animations[3].timelines[0];
    arm.keys[0].time = 300.0;
    arm.keys[1].time = 100.0;
    assert_eq!(
        data.validate(),
        Err(DataError::UnsortedTimelineKeys {
            animation: 3,
            timeline: 0,
            key: 1
        })
    );
}

#[test]
fn validate_reports_missing_nested_animation() {
    let mut data = hero();
    let lantern = &mut data.entities[0].animations[3].timelines[1];
    assert_eq!(lantern.object_type, ObjectType::Entity);
    if let spriter_animation_core::KeyPayload::Object(info) = &mut lantern.keys[0].payload {
        info.entity = None;
    }
    assert!(matches!(
        data.validate(),
        Err(DataError::MissingNestedAnimation {
            animation: 3,
            timeline: 1,
            target: None
        })
    ));
}
