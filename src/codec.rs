//! The geohash codec: binary interval bisection of coordinates, bit
//! interleaving and base-32 chunking.
//!
//! Encoding quantizes each axis independently: starting from the axis's full
//! range, every step halves the current interval and records which half the
//! coordinate falls in, most significant bit first. The longitude and
//! latitude bit streams are then interleaved, longitude first, and chunked
//! into 5-bit groups mapped through the alphabet. Decoding replays the same
//! narrowing from the code's bits and returns the final interval per axis.
//!
//! Code validation is the concern of [`Geohash`](crate::geohash::Geohash)
//! construction; the decoder requires input already checked against the
//! alphabet.

use crate::alphabet;
use crate::angle::{Angle, Latitude, Longitude};
use crate::bbox::BoundingBox;
use crate::bits::BitArray;
use crate::point::Point;

/// Encode a point into a geohash code of `resolution` characters.
pub(crate) fn encode(point: &Point, resolution: usize) -> String {
    let bit_count = alphabet::BITS_PER_CHARACTER * resolution;
    let latitude_bit_count = bit_count / 2;
    // When the total is odd the extra bit goes to the longitude.
    let longitude_bit_count = bit_count - latitude_bit_count;
    let latitude_bits = coordinate_to_bits(
        point.latitude().angle(),
        Latitude::MIN.angle(),
        Latitude::MAX.angle(),
        latitude_bit_count,
    );
    let longitude_bits = coordinate_to_bits(
        point.longitude().angle(),
        Longitude::MIN.angle(),
        Longitude::MAX.angle(),
        longitude_bit_count,
    );

    let mut interleaved = BitArray::builder();
    for i in 0..longitude_bits.len() {
        interleaved = interleaved.append(longitude_bits.get(i));
        if i < latitude_bits.len() {
            interleaved = interleaved.append(latitude_bits.get(i));
        }
    }
    bits_to_code(&interleaved.build())
}

/// Decode a geohash code into the bounding box of its cell.
///
/// The empty code denotes the whole world and short-circuits the bisection.
/// `code` must already be validated against the alphabet.
pub(crate) fn decode(code: &str) -> BoundingBox {
    if code.is_empty() {
        return BoundingBox::WORLD;
    }
    let code_bits = code_to_bits(code);
    let mut longitude_bits = BitArray::builder();
    let mut latitude_bits = BitArray::builder();
    for (index, bit) in code_bits.iter().enumerate() {
        if index % 2 == 0 {
            longitude_bits = longitude_bits.append(bit);
        } else {
            latitude_bits = latitude_bits.append(bit);
        }
    }
    let (west, east) = bits_to_range(
        &longitude_bits.build(),
        Longitude::MIN.angle(),
        Longitude::MAX.angle(),
    );
    let (south, north) = bits_to_range(
        &latitude_bits.build(),
        Latitude::MIN.angle(),
        Latitude::MAX.angle(),
    );
    // Bisection intervals stay within the axis ranges they started from.
    BoundingBox::from_edges(
        Latitude::from_degrees_unchecked(north.as_degrees()),
        Latitude::from_degrees_unchecked(south.as_degrees()),
        Longitude::from_degrees_unchecked(east.as_degrees()),
        Longitude::from_degrees_unchecked(west.as_degrees()),
    )
}

/// Quantize one coordinate into `steps` bits by repeated interval halving.
fn coordinate_to_bits(coordinate: Angle, minimum: Angle, maximum: Angle, steps: usize) -> BitArray {
    let mut bits = BitArray::builder();
    let mut lower = minimum;
    let mut upper = maximum;
    for _ in 0..steps {
        let middle = (lower + upper) / 2.0;
        if coordinate >= middle {
            bits = bits.append(true);
            lower = middle;
        } else {
            bits = bits.append(false);
            upper = middle;
        }
    }
    bits.build()
}

/// Replay the bisection for one axis, narrowing to the interval the bits
/// describe. Returns (lower, upper).
fn bits_to_range(bits: &BitArray, minimum: Angle, maximum: Angle) -> (Angle, Angle) {
    let mut lower = minimum;
    let mut upper = maximum;
    for bit in bits.iter() {
        let middle = (lower + upper) / 2.0;
        if bit {
            lower = middle;
        } else {
            upper = middle;
        }
    }
    (lower, upper)
}

/// Chunk interleaved bits into 5-bit groups, MSB first, and map each group
/// through the alphabet.
fn bits_to_code(bits: &BitArray) -> String {
    bits.as_slice()
        .chunks_exact(alphabet::BITS_PER_CHARACTER)
        .map(|chunk| {
            let index = chunk.iter().fold(0u8, |acc, &bit| acc << 1 | u8::from(bit));
            alphabet::character_for(index)
        })
        .collect()
}

/// Expand each code character back to its 5 bits, MSB first.
fn code_to_bits(code: &str) -> BitArray {
    let mut builder = BitArray::builder();
    for character in code.chars() {
        let index = alphabet::index_of(character)
            .expect("codec input is validated at geohash construction");
        for shift in (0..alphabet::BITS_PER_CHARACTER).rev() {
            builder = builder.append(index >> shift & 1 == 1);
        }
    }
    builder.build()
}
