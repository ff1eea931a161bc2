//! Lightbox navigation properties: wraparound, inverse laws, preloading.

use super::{ring, RecordingPreloader};
use crate::filter::GallerySelector;
use crate::lightbox::{Lightbox, LightboxUpdate};
use crate::model::{GroupId, ItemId};
use crate::preload::NoopPreloader;

fn selector(n: usize) -> GallerySelector {
    GallerySelector::new(ring(n), GroupId::new("gallery-tattoos"))
}

fn open_at(n: usize, start: usize) -> (Lightbox, GallerySelector) {
    let selector = selector(n);
    let mut lightbox = Lightbox::new(NoopPreloader);
    lightbox.activate(&ItemId::new(format!("i{start}")), &selector);
    (lightbox, selector)
}

fn index_of(lightbox: &Lightbox) -> usize {
    lightbox.session().expect("lightbox should be open").index()
}

#[test]
fn test_index_stays_in_range_for_every_sequence() {
    const STEPS: usize = 6;

    for n in 1..=6 {
        for start in 0..n {
            // Every next/prev sequence of STEPS moves, encoded as bits
            for moves in 0u32..(1 << STEPS) {
                let (mut lightbox, _) = open_at(n, start);
                let mut expected = start as isize;

                for bit in 0..STEPS {
                    if moves & (1 << bit) != 0 {
                        lightbox.next();
                        expected += 1;
                    } else {
                        lightbox.prev();
                        expected -= 1;
                    }
                    let index = index_of(&lightbox);
                    assert!(index < n, "index {index} out of range for n={n}");
                    assert_eq!(index, expected.rem_euclid(n as isize) as usize);
                }
            }
        }
    }
}

#[test]
fn test_next_then_prev_restores_index() {
    for n in 1..=8 {
        for start in 0..n {
            let (mut lightbox, _) = open_at(n, start);
            lightbox.next();
            lightbox.prev();
            assert_eq!(index_of(&lightbox), start, "n={n} start={start}");

            lightbox.prev();
            lightbox.next();
            assert_eq!(index_of(&lightbox), start, "n={n} start={start}");
        }
    }
}

#[test]
fn test_full_lap_returns_to_start() {
    for n in 1..=8 {
        let (mut lightbox, _) = open_at(n, 0);
        for _ in 0..n {
            lightbox.next();
        }
        assert_eq!(index_of(&lightbox), 0);
        for _ in 0..n {
            lightbox.prev();
        }
        assert_eq!(index_of(&lightbox), 0);
    }
}

#[test]
fn test_single_item_self_loop() {
    let (mut lightbox, _) = open_at(1, 0);

    let update = lightbox.next().unwrap();
    assert!(matches!(update, LightboxUpdate::Moved(ref frame) if frame.index == 0));
    let update = lightbox.prev().unwrap();
    assert!(matches!(update, LightboxUpdate::Moved(ref frame) if frame.index == 0));
    assert_eq!(index_of(&lightbox), 0);
}

#[test]
fn test_frames_follow_snapshot_order() {
    let (mut lightbox, _) = open_at(3, 2);

    let Some(LightboxUpdate::Moved(frame)) = lightbox.next() else {
        panic!("expected a move");
    };
    assert_eq!(frame.id, ItemId::new("i0"));
    assert_eq!(frame.image.src, "img/i0.webp");
    assert_eq!(frame.image.alt, "Piece i0");
    assert_eq!(frame.total, 3);

    let Some(LightboxUpdate::Moved(frame)) = lightbox.prev() else {
        panic!("expected a move");
    };
    assert_eq!(frame.id, ItemId::new("i2"));
}

#[test]
fn test_preloads_both_neighbours_on_open_and_move() {
    let selector = selector(5);
    let mut lightbox = Lightbox::new(RecordingPreloader::default());

    lightbox.activate(&ItemId::new("i0"), &selector);
    assert_eq!(
        lightbox.preloader().take(),
        vec!["img/i4.webp".to_string(), "img/i1.webp".to_string()]
    );

    lightbox.next();
    assert_eq!(
        lightbox.preloader().take(),
        vec!["img/i0.webp".to_string(), "img/i2.webp".to_string()]
    );

    lightbox.prev();
    lightbox.prev();
    let requested = lightbox.preloader().take();
    assert_eq!(requested.len(), 4);
    assert_eq!(&requested[2..], &["img/i3.webp".to_string(), "img/i0.webp".to_string()]);
}

#[test]
fn test_no_preload_for_single_item_or_after_close() {
    let selector = selector(1);
    let mut lightbox = Lightbox::new(RecordingPreloader::default());

    lightbox.activate(&ItemId::new("i0"), &selector);
    lightbox.next();
    assert!(lightbox.preloader().take().is_empty());

    lightbox.close();
    lightbox.next();
    lightbox.prev();
    assert!(lightbox.preloader().take().is_empty());
}

#[test]
fn test_two_item_ring_preloads_other_once() {
    let selector = selector(2);
    let mut lightbox = Lightbox::new(RecordingPreloader::default());

    lightbox.activate(&ItemId::new("i1"), &selector);
    assert_eq!(lightbox.preloader().take(), vec!["img/i0.webp".to_string()]);
}

#[test]
fn test_reactivation_replaces_session() {
    let selector = selector(4);
    let mut lightbox = Lightbox::new(NoopPreloader);

    lightbox.activate(&ItemId::new("i1"), &selector);
    lightbox.next();
    let update = lightbox.activate(&ItemId::new("i3"), &selector);

    assert!(matches!(update, Some(LightboxUpdate::Opened(ref frame)) if frame.index == 3));
    assert_eq!(lightbox.session().unwrap().snapshot(), &selector.visible_set());
}
