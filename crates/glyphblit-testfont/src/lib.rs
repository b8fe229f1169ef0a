//! A tiny TrueType font assembled in memory, for tests
//!
//! 1000 units per em, ascender 800, descender -200. Glyph 0 is empty with
//! advance 500. Glyphs 1 ('A') and 2 ('V') are the square (100,0)-(600,700)
//! with advance 700. At 10px every coordinate lands on a pixel boundary.
//! The optional `kern` table holds a single pair, (A, V).

pub const UNITS_PER_EM: u16 = 1000;

/// Kerning adjustment for the pair (A, V) in font units
pub const KERN_AV: i16 = -250;

/// Font bytes, with or without the `kern` table
pub fn test_font(with_kern: bool) -> Vec<u8> {
    let mut tables: Vec<(&[u8; 4], Vec<u8>)> = vec![
        (b"cmap", cmap()),
        (b"glyf", glyf()),
        (b"head", head()),
        (b"hhea", hhea()),
        (b"hmtx", hmtx()),
        (b"loca", loca()),
        (b"maxp", maxp()),
    ];
    if with_kern {
        tables.push((b"kern", kern()));
    }
    tables.sort_by_key(|(tag, _)| **tag);
    assemble(&tables)
}

fn assemble(tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let mut out = Vec::new();
    push_u32(&mut out, 0x0001_0000);
    push_u16(&mut out, num_tables);
    push_u16(&mut out, 0);
    push_u16(&mut out, 0);
    push_u16(&mut out, 0);

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in tables {
        out.extend_from_slice(*tag);
        push_u32(&mut out, 0);
        push_u32(&mut out, offset as u32);
        push_u32(&mut out, data.len() as u32);

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }
    out.extend_from_slice(&body);
    out
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000);
    push_u32(&mut t, 0x0001_0000);
    push_u32(&mut t, 0);
    push_u32(&mut t, 0x5F0F_3CF5);
    push_u16(&mut t, 0);
    push_u16(&mut t, UNITS_PER_EM);
    t.extend_from_slice(&[0; 16]);
    for v in [0i16, 0, 700, 700] {
        push_i16(&mut t, v);
    }
    push_u16(&mut t, 0);
    push_u16(&mut t, 8);
    push_i16(&mut t, 2);
    push_i16(&mut t, 0); // short loca
    push_i16(&mut t, 0);
    t
}

fn hhea() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000);
    for v in [800i16, -200, 0] {
        push_i16(&mut t, v);
    }
    push_u16(&mut t, 700);
    for v in [0i16, 0, 600, 1, 0, 0, 0, 0, 0, 0, 0] {
        push_i16(&mut t, v);
    }
    push_u16(&mut t, 3);
    t
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000);
    push_u16(&mut t, 3);
    for v in [4u16, 1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0] {
        push_u16(&mut t, v);
    }
    t
}

fn hmtx() -> Vec<u8> {
    let mut t = Vec::new();
    for (advance, lsb) in [(500u16, 0i16), (700, 100), (700, 100)] {
        push_u16(&mut t, advance);
        push_i16(&mut t, lsb);
    }
    t
}

fn square_glyph() -> Vec<u8> {
    let mut g = Vec::new();
    push_i16(&mut g, 1);
    for v in [100i16, 0, 600, 700] {
        push_i16(&mut g, v);
    }
    push_u16(&mut g, 3);
    push_u16(&mut g, 0);
    g.extend_from_slice(&[0x01; 4]);
    for dx in [100i16, 500, 0, -500] {
        push_i16(&mut g, dx);
    }
    for dy in [0i16, 0, 700, 0] {
        push_i16(&mut g, dy);
    }
    g
}

fn glyf() -> Vec<u8> {
    let mut t = square_glyph();
    t.extend(square_glyph());
    t
}

fn loca() -> Vec<u8> {
    let len = square_glyph().len() as u16;
    let mut t = Vec::new();
    for offset in [0, 0, len, 2 * len] {
        push_u16(&mut t, offset / 2);
    }
    t
}

fn cmap() -> Vec<u8> {
    // 'A' -> 1, 'V' -> 2, plus the required 0xFFFF terminator
    let segments: [(u16, u16, i16); 3] = [(0x41, 0x41, -0x40), (0x56, 0x56, -0x54), (0xFFFF, 0xFFFF, 1)];
    let seg_count = segments.len() as u16;

    let mut sub = Vec::new();
    push_u16(&mut sub, 4);
    push_u16(&mut sub, 16 + 8 * seg_count);
    push_u16(&mut sub, 0);
    push_u16(&mut sub, seg_count * 2);
    push_u16(&mut sub, 4);
    push_u16(&mut sub, 1);
    push_u16(&mut sub, 2);
    for (_, end, _) in segments {
        push_u16(&mut sub, end);
    }
    push_u16(&mut sub, 0);
    for (start, _, _) in segments {
        push_u16(&mut sub, start);
    }
    for (_, _, delta) in segments {
        push_i16(&mut sub, delta);
    }
    for _ in segments {
        push_u16(&mut sub, 0);
    }

    let mut t = Vec::new();
    push_u16(&mut t, 0);
    push_u16(&mut t, 1);
    push_u16(&mut t, 3);
    push_u16(&mut t, 1);
    push_u32(&mut t, 12);
    t.extend(sub);
    t
}

fn kern() -> Vec<u8> {
    let mut t = Vec::new();
    push_u16(&mut t, 0);
    push_u16(&mut t, 1);
    push_u16(&mut t, 0);
    push_u16(&mut t, 6 + 8 + 6);
    push_u16(&mut t, 0x0001);
    push_u16(&mut t, 1);
    push_u16(&mut t, 6);
    push_u16(&mut t, 0);
    push_u16(&mut t, 0);
    push_u16(&mut t, 1);
    push_u16(&mut t, 2);
    push_i16(&mut t, KERN_AV);
    t
}

fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_i16(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}
