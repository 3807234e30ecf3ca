use crate::error::DspError;

/// Waveform data as loaded from a sound bank: 16 bit words and, for 24 bit
/// sounds, one extra low byte per word.
///
/// Borrowed and read only, so any number of voices can share it.
#[derive(Debug, Clone, Copy)]
pub struct SampleData<'a> {
    words: &'a [i16],
    extension: Option<&'a [u8]>,
}

impl<'a> SampleData<'a> {
    pub fn new(words: &'a [i16]) -> Self {
        Self {
            words,
            extension: None,
        }
    }

    pub fn with_extension(words: &'a [i16], extension: &'a [u8]) -> Result<Self, DspError> {
        if words.len() != extension.len() {
            return Err(DspError::ExtensionLength {
                words: words.len(),
                bytes: extension.len(),
            });
        }

        Ok(Self {
            words,
            extension: Some(extension),
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_24bit(&self) -> bool {
        self.extension.is_some()
    }

    pub fn words(&self) -> &'a [i16] {
        self.words
    }

    pub fn extension(&self) -> Option<&'a [u8]> {
        self.extension
    }
}

/// Reads a single sample as a float. Implemented once per bit depth so the
/// renderers are compiled without a depth check in their loops.
pub trait SampleSource {
    fn at(&self, index: u32) -> f32;
}

pub struct Samples16<'a> {
    words: &'a [i16],
}

impl<'a> Samples16<'a> {
    pub fn new(words: &'a [i16]) -> Self {
        Self { words }
    }
}

impl SampleSource for Samples16<'_> {
    #[inline(always)]
    fn at(&self, index: u32) -> f32 {
        self.words[index as usize] as f32
    }
}

/// 24 bit samples, played as the integer composed of word and low byte.
pub struct Samples24<'a> {
    words: &'a [i16],
    extension: &'a [u8],
}

impl<'a> Samples24<'a> {
    pub fn new(words: &'a [i16], extension: &'a [u8]) -> Self {
        debug_assert_eq!(words.len(), extension.len());
        Self { words, extension }
    }

    /// The 24 bit integer made of the word and its low byte.
    #[inline(always)]
    pub fn composed(&self, index: u32) -> i32 {
        let index = index as usize;
        ((self.words[index] as i32) << 8) | self.extension[index] as i32
    }
}

impl SampleSource for Samples24<'_> {
    #[inline(always)]
    fn at(&self, index: u32) -> f32 {
        self.composed(index) as f32
    }
}
