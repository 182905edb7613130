extern crate std;

use std::vec;

use crate::Packet;

fn filled(capacity: usize, written: usize) -> Packet {
    let mut packet = Packet::new(capacity);
    for i in 0..written {
        packet.write(i as u8 + 1);
    }
    packet
}

#[test]
fn write_slice_and_read_slice() {
    let mut packet = Packet::new(8);
    packet.write_slice(&[9, 8, 7, 6, 5], 1, 3);
    assert_eq!(packet.seek(), 3);
    assert_eq!(packet.len(), 3);
    assert_eq!(&packet.as_bytes()[..3], &[8, 7, 6]);

    let mut out = [0u8; 4];
    packet.read_slice_at(0, &mut out, 1, 3);
    assert_eq!(out, [0, 8, 7, 6]);
    assert_eq!(packet.seek(), 3);
    assert_eq!(packet.len(), 3);

    packet.write_slice_at(6, &[1, 2], 0, 2);
    assert_eq!(packet.seek(), 8);
    assert_eq!(packet.len(), 5);
}

#[test]
fn write_from_advances_source_seek_only() {
    let mut src = filled(8, 6);
    src.set_seek(2);
    let mut dst = Packet::new(8);

    dst.write_from(&mut src, 3);
    assert_eq!(&dst.as_bytes()[..3], &[3, 4, 5]);
    assert_eq!((dst.seek(), dst.len()), (3, 3));
    assert_eq!((src.seek(), src.len()), (5, 6));
}

#[test]
fn write_from_at_positions_both() {
    let mut src = filled(8, 8);
    let mut dst = Packet::new(8);

    dst.write_from_at(4, &mut src, 6, 2);
    assert_eq!(&dst.as_bytes()[4..6], &[7, 8]);
    assert_eq!(dst.seek(), 6);
    assert_eq!(src.seek(), 8);
}

#[test]
fn read_into_advances_target_seek_and_len() {
    let mut src = filled(8, 4);
    src.set_seek(1);
    let mut dst = Packet::new(8);
    dst.set_seek(2);

    src.read_into(&mut dst, 3);
    assert_eq!(&dst.as_bytes()[2..5], &[2, 3, 4]);
    assert_eq!((dst.seek(), dst.len()), (5, 3));
    assert_eq!((src.seek(), src.len()), (4, 4));

    src.read_into_at(0, &mut dst, 0, 1);
    assert_eq!(dst.as_bytes()[0], 1);
    assert_eq!((dst.seek(), dst.len()), (1, 4));
    assert_eq!(src.seek(), 1);
}

#[test]
fn copy_from_limited_by_source_unread() {
    let mut src = filled(16, 5);
    src.set_seek(1);
    let mut dst = Packet::new(16);

    assert_eq!(dst.copy_from(&mut src), 4);
    assert_eq!(&dst.as_bytes()[..4], &[2, 3, 4, 5]);
    assert_eq!((dst.seek(), dst.len()), (4, 4));
    assert_eq!(src.seek(), 5);
    assert_eq!(src.unread(), 0);

    assert_eq!(dst.copy_from(&mut src), 0);
}

#[test]
fn copy_from_limited_by_destination_room() {
    let mut src = filled(16, 10);
    src.set_seek(0);
    let mut dst = Packet::new(8);
    dst.set_seek(5);

    assert_eq!(dst.copy_from(&mut src), 3);
    assert_eq!(&dst.as_bytes()[5..], &[1, 2, 3]);
    assert_eq!(dst.seek(), 8);
    assert_eq!(src.seek(), 3);
}

#[test]
fn copy_from_limited_by_source_room() {
    let mut src = filled(6, 6);
    src.set_len(20);
    src.set_seek(4);
    let mut dst = Packet::new(16);

    assert_eq!(dst.copy_from(&mut src), 2);
    assert_eq!(&dst.as_bytes()[..2], &[5, 6]);
    assert_eq!(src.seek(), 6);
}

#[test]
fn copy_from_with_seek_past_len_copies_nothing() {
    let mut src = filled(8, 2);
    src.set_seek(6);
    let mut dst = Packet::new(8);

    assert_eq!(dst.copy_from(&mut src), 0);
    assert_eq!(dst.len(), 0);
    assert_eq!(src.seek(), 6);
}

#[test]
fn copy_from_with_seek_past_capacity_copies_nothing() {
    let mut src = filled(8, 8);
    src.set_seek(20);
    let mut dst = Packet::new(8);

    assert_eq!(dst.copy_from(&mut src), 0);
    assert_eq!(src.seek(), 20);

    src.set_seek(0);
    dst.set_seek(12);
    assert_eq!(dst.copy_from(&mut src), 0);
    assert_eq!((dst.seek(), dst.len()), (12, 0));
    assert_eq!(src.seek(), 0);
}

#[test]
fn copy_from_drains_in_chunks() {
    let mut src = Packet::from(vec![0xEE; 10]);
    src.set_len(10);
    let mut chunks = 0;

    loop {
        let mut dst = Packet::new(4);
        if dst.copy_from(&mut src) == 0 {
            break;
        }
        chunks += 1;
    }
    assert_eq!(chunks, 3);
    assert_eq!(src.seek(), 10);
}
