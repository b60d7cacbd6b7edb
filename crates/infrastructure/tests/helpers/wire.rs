//! Hand-built DNS replies for parser and client tests.

use std::net::Ipv6Addr;

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_MX: u16 = 15;
pub const TYPE_TXT: u16 = 16;
pub const TYPE_AAAA: u16 = 28;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Answer whose owner name points back at the question name.
pub fn answer(rtype: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = vec![0xC0, 0x0C];
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

pub fn a_answer(ip: [u8; 4], ttl: u32) -> Vec<u8> {
    answer(TYPE_A, ttl, &ip)
}

pub fn aaaa_answer(ip: Ipv6Addr, ttl: u32) -> Vec<u8> {
    answer(TYPE_AAAA, ttl, &ip.octets())
}

pub fn mx_answer(preference: u16, exchange: &str, ttl: u32) -> Vec<u8> {
    let mut rdata = preference.to_be_bytes().to_vec();
    rdata.extend(encode_name(exchange));
    answer(TYPE_MX, ttl, &rdata)
}

pub fn ns_answer(host: &str, ttl: u32) -> Vec<u8> {
    answer(TYPE_NS, ttl, &encode_name(host))
}

pub fn cname_answer(target: &str, ttl: u32) -> Vec<u8> {
    answer(TYPE_CNAME, ttl, &encode_name(target))
}

pub fn txt_answer(text: &str, ttl: u32) -> Vec<u8> {
    let mut rdata = vec![text.len() as u8];
    rdata.extend_from_slice(text.as_bytes());
    answer(TYPE_TXT, ttl, &rdata)
}

/// Offset just past the question section of a single-question message.
fn question_end(query: &[u8]) -> usize {
    let mut pos = 12;
    while query[pos] != 0 {
        pos += usize::from(query[pos]) + 1;
    }
    pos + 1 + 4
}

/// Build a reply echoing the ID and question of `query`.
pub fn reply_to(query: &[u8], rcode: u8, truncated: bool, answers: &[Vec<u8>]) -> Vec<u8> {
    let mut out = query[..question_end(query)].to_vec();
    out[2] = 0x81 | if truncated { 0x02 } else { 0x00 };
    out[3] = 0x80 | rcode;
    out[6..8].copy_from_slice(&(answers.len() as u16).to_be_bytes());
    out[8..12].copy_from_slice(&[0, 0, 0, 0]);
    for answer in answers {
        out.extend_from_slice(answer);
    }
    out
}
