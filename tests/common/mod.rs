//! Minimal image fixtures carrying EXIF dates
//!
//! The TIFF stream is built by hand: a little-endian header, IFD0 with an
//! optional `DateTime` entry, and an optional Exif sub-IFD holding
//! `DateTimeOriginal`. JPEG and PNG fixtures wrap the same stream in an
//! APP1 segment or an `eXIf` chunk.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

const TAG_DATE_TIME: u16 = 0x0132;
const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const ASCII_DATE_LEN: u32 = 20;

fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_entry(buf: &mut Vec<u8>, tag: u16, typ: u16, count: u32, value: u32) {
    push_u16(buf, tag);
    push_u16(buf, typ);
    push_u32(buf, count);
    push_u32(buf, value);
}

fn push_date(buf: &mut Vec<u8>, date: &str) {
    assert_eq!(date.len(), 19, "EXIF dates are 19 characters");
    buf.extend_from_slice(date.as_bytes());
    buf.push(0);
}

/// TIFF byte stream with the given `DateTime` and `DateTimeOriginal` values
///
/// At least one of the two must be set.
pub fn exif_tiff(date_time: Option<&str>, date_time_original: Option<&str>) -> Vec<u8> {
    let ifd0_count = date_time.is_some() as usize + date_time_original.is_some() as usize;
    assert!(ifd0_count > 0);

    let ifd0_end = 8 + 2 + 12 * ifd0_count + 4;
    let date_time_at = ifd0_end;
    let exif_ifd_at = date_time_at + if date_time.is_some() { 20 } else { 0 };
    let original_at = exif_ifd_at + 2 + 12 + 4;

    let mut buf = Vec::new();
    buf.extend_from_slice(b"II");
    push_u16(&mut buf, 42);
    push_u32(&mut buf, 8);

    push_u16(&mut buf, ifd0_count as u16);
    if date_time.is_some() {
        push_entry(&mut buf, TAG_DATE_TIME, TYPE_ASCII, ASCII_DATE_LEN, date_time_at as u32);
    }
    if date_time_original.is_some() {
        push_entry(&mut buf, TAG_EXIF_IFD_POINTER, TYPE_LONG, 1, exif_ifd_at as u32);
    }
    push_u32(&mut buf, 0);

    if let Some(date) = date_time {
        push_date(&mut buf, date);
    }
    if let Some(date) = date_time_original {
        push_u16(&mut buf, 1);
        push_entry(
            &mut buf,
            TAG_DATE_TIME_ORIGINAL,
            TYPE_ASCII,
            ASCII_DATE_LEN,
            original_at as u32,
        );
        push_u32(&mut buf, 0);
        push_date(&mut buf, date);
    }

    buf
}

/// JPEG with an APP1 Exif segment
pub fn exif_jpeg(tiff: &[u8]) -> Vec<u8> {
    let mut buf = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let len = (2 + 6 + tiff.len()) as u16;
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(b"Exif\0\0");
    buf.extend_from_slice(tiff);
    buf.extend_from_slice(&[0xFF, 0xD9]);
    buf
}

/// PNG with an `eXIf` chunk
pub fn exif_png(tiff: &[u8]) -> Vec<u8> {
    let mut buf = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    buf.extend_from_slice(&(tiff.len() as u32).to_be_bytes());

    let mut chunk = b"eXIf".to_vec();
    chunk.extend_from_slice(tiff);
    buf.extend_from_slice(&chunk);
    buf.extend_from_slice(&crc32(&chunk).to_be_bytes());

    buf.extend_from_slice(&0u32.to_be_bytes());
    let iend = b"IEND";
    buf.extend_from_slice(iend);
    buf.extend_from_slice(&crc32(iend).to_be_bytes());
    buf
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

/// Write an image whose container matches the file extension
pub fn write_dated_image(path: &Path, date: &str) {
    let tiff = exif_tiff(Some(date), None);
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let bytes = match ext.as_str() {
        "jpg" | "jpeg" => exif_jpeg(&tiff),
        "png" => exif_png(&tiff),
        _ => tiff,
    };
    fs::write(path, bytes).unwrap();
}
