use invoicer_layout::FontFace;

/// Resource name under which a font face is registered in the page resources.
pub fn font_resource_name(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => "F1",
        FontFace::Bold => "F2",
    }
}

/// Encodes text for a WinAnsi (Latin-1 compatible) simple font.
///
/// Characters outside Latin-1 become `?`. The flag reports whether any
/// replacement happened.
pub fn to_win_ansi(s: &str) -> (Vec<u8>, bool) {
    let mut replaced = false;
    let bytes = s
        .chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(byte) => byte,
            Err(_) => {
                replaced = true;
                b'?'
            }
        })
        .collect();
    (bytes, replaced)
}
